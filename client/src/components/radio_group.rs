//! Inline group of radio buttons over a fixed option list.

use leptos::prelude::*;

use crate::components::text::Text;
use crate::state::article::ArticleOption;

#[component]
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(into)] title: String,
    options: &'static [ArticleOption],
    #[prop(into)] selected: Signal<ArticleOption>,
    on_change: Callback<ArticleOption>,
) -> impl IntoView {
    let items = options
        .iter()
        .copied()
        .map(|opt| {
            let is_checked = move || selected.get() == opt;
            view! {
                <label class="radio-group__item" class:radio-group__item--checked=is_checked>
                    <input
                        type="radio"
                        class="radio-group__input"
                        name=name.clone()
                        value=opt.value
                        prop:checked=is_checked
                        on:change=move |_| on_change.run(opt)
                    />
                    <span class="radio-group__label">{opt.label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="radio-group">
            <Text uppercase=true size=12 weight=800>{title}</Text>
            <div class="radio-group__options">{items}</div>
        </div>
    }
}
