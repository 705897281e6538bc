//! Round arrow button that opens and closes the settings panel.

use leptos::prelude::*;

/// Toggle button; `on_click` receives the open state the user asked for.
#[component]
pub fn ArrowButton(#[prop(into)] is_open: Signal<bool>, on_click: Callback<bool>) -> impl IntoView {
    let label = move || {
        if is_open.get() {
            "Close settings panel"
        } else {
            "Open settings panel"
        }
    };

    view! {
        <button
            type="button"
            class="arrow-button"
            class:arrow-button--open=move || is_open.get()
            aria-label=label
            title=label
            on:click=move |_| on_click.run(!is_open.get_untracked())
        >
            <span class="arrow-button__icon" class:arrow-button__icon--open=move || is_open.get()>
                "\u{279c}"
            </span>
        </button>
    }
}
