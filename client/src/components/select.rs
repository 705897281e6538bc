//! Dropdown selector over a fixed option list.
//!
//! DESIGN
//! ======
//! The dropdown owns only its open flag. Selection lives with the caller and
//! flows in through `selected` / out through `on_change`. Clicking anywhere
//! outside the dropdown, or pressing Escape, collapses it.

use leptos::prelude::*;

use crate::components::text::Text;
use crate::state::article::ArticleOption;
use crate::util::dismiss::{DismissBehavior, PointerTrigger};
use crate::util::dismiss_dom::use_dismiss;

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

/// Class for the preview of an option (font face, swatch).
fn preview_class(opt: ArticleOption) -> String {
    match opt.class_name {
        Some(extra) => format!("select__preview {extra}"),
        None => "select__preview".to_owned(),
    }
}

/// Class for an option row in the open list.
fn option_row_class(opt: ArticleOption) -> String {
    match opt.option_class_name {
        Some(extra) => format!("select__option {extra}"),
        None => "select__option".to_owned(),
    }
}

#[component]
pub fn Select(
    #[prop(into)] title: String,
    options: &'static [ArticleOption],
    #[prop(into)] selected: Signal<ArticleOption>,
    on_change: Callback<ArticleOption>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let root_ref = NodeRef::<leptos::html::Div>::new();

    use_dismiss(
        is_open.into(),
        root_ref,
        PointerTrigger::Click,
        DismissBehavior::new().on_change(move |open| is_open.set(open)),
    );

    let items = options
        .iter()
        .copied()
        .map(|opt| {
            let on_pick = move |_ev: leptos::ev::MouseEvent| {
                is_open.set(false);
                on_change.run(opt);
            };
            view! {
                <li
                    class=option_row_class(opt)
                    class:select__option--selected=move || selected.get() == opt
                    role="option"
                    tabindex="0"
                    data-value=opt.value
                    on:click=on_pick
                >
                    <span class=preview_class(opt)>{opt.label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="select" node_ref=root_ref>
            <Text uppercase=true size=12 weight=800>{title}</Text>
            <div
                class="select__placeholder"
                class:select__placeholder--open=move || is_open.get()
                role="button"
                tabindex="0"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span class=move || preview_class(selected.get())>{move || selected.get().label}</span>
                <span class="select__arrow" class:select__arrow--open=move || is_open.get()>"\u{25be}"</span>
            </div>
            <ul class="select__options" class:select__options--open=move || is_open.get() role="listbox">
                {items}
            </ul>
        </div>
    }
}
