//! Typographic wrapper used for headings and control titles.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Class list for a text block.
fn text_class(uppercase: bool, size: Option<u16>, weight: Option<u16>) -> String {
    let mut class = String::from("text");
    if uppercase {
        class.push_str(" text--uppercase");
    }
    if let Some(size) = size {
        class.push_str(&format!(" text--size-{size}"));
    }
    if let Some(weight) = weight {
        class.push_str(&format!(" text--weight-{weight}"));
    }
    class
}

/// Text block rendered as `<h2>` when `heading` is set, `<div>` otherwise.
#[component]
pub fn Text(
    #[prop(optional)] heading: bool,
    #[prop(optional)] uppercase: bool,
    #[prop(optional)] size: Option<u16>,
    #[prop(optional)] weight: Option<u16>,
    children: Children,
) -> impl IntoView {
    let class = text_class(uppercase, size, weight);
    if heading {
        view! { <h2 class=class>{children()}</h2> }.into_any()
    } else {
        view! { <div class=class>{children()}</div> }.into_any()
    }
}
