//! Reader page: applied display settings and the article they style.
//!
//! ARCHITECTURE
//! ============
//! The page owns the one applied `ArticleState`. The settings form receives a
//! read-only view of it for seeding and a setter for commits. Every field is
//! exposed to the article as a CSS custom property on `<main>`; the page does
//! not interpret the values.

use leptos::prelude::*;

use crate::components::article::Article;
use crate::components::article_params_form::ArticleParamsForm;
use crate::state::article::ArticleState;

#[component]
pub fn ReaderPage() -> impl IntoView {
    let applied = RwSignal::new(ArticleState::default());
    let on_set = Callback::new(move |next: ArticleState| applied.set(next));
    let style = move || applied.with(ArticleState::inline_style);

    view! {
        <main class="main" style=style>
            <ArticleParamsForm current_state=applied on_set=on_set/>
            <Article/>
        </main>
    }
}
