//! Static article body.
//!
//! Reads typography and layout from the `--font-*`, `--bg-color` and
//! `--container-width` custom properties set by the reader page.

use leptos::prelude::*;

const PARAGRAPHS: &[&str] = &[
    "A city waking up has its own grammar. Shutters roll up one after another, \
     the first trams drag their bells along the avenue, and bakeries send the \
     smell of warm crust into streets that are still blue with the night.",
    "We spent a week walking the old quarter without a map. The rule was simple: \
     at every crossing, take the narrower street. It led us into courtyards with \
     laundry strung between balconies, past a workshop where a man repaired \
     accordions, and once, by mistake, into a wedding.",
    "What stays with you is not the monuments but the rhythm. Lunch stretches \
     into the afternoon, shops close when they please, and nobody apologises for \
     the pace. By the third day we had stopped checking the time.",
    "On the last evening we climbed to the terrace above the market. The roofs \
     went orange, then violet, then disappeared, and the city switched from \
     sight to sound: dishes, radios, a scooter, someone practising scales.",
];

#[component]
pub fn Article() -> impl IntoView {
    view! {
        <article class="article">
            <header class="article__header">
                <h1 class="article__title">"Taking the narrower street"</h1>
                <p class="article__subtitle">"Notes from a week without a map"</p>
            </header>
            {PARAGRAPHS
                .iter()
                .map(|text| view! { <p class="article__text">{*text}</p> })
                .collect_view()}
        </article>
    }
}
