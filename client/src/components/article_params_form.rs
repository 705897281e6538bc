//! Side panel form for article typography and layout settings.
//!
//! ARCHITECTURE
//! ============
//! The form keeps a private `ParamsFormState` (panel flag + draft) seeded from
//! the shell's applied state at mount. Field controls edit only the draft.
//! Submit and reset hand a full `ArticleState` to `on_set`; neither closes the
//! panel. The panel closes through the arrow toggle, an outside `mousedown`,
//! or Escape.

use leptos::prelude::*;

use crate::components::arrow_button::ArrowButton;
use crate::components::button::{Button, ButtonKind};
use crate::components::radio_group::RadioGroup;
use crate::components::select::Select;
use crate::components::separator::Separator;
use crate::components::text::Text;
use crate::state::article::{ArticleField, ArticleOption, ArticleState};
use crate::state::params_form::ParamsFormState;
use crate::util::dismiss::{DismissBehavior, PointerTrigger};
use crate::util::dismiss_dom::use_dismiss;

/// Settings panel with its toggle button.
#[component]
pub fn ArticleParamsForm(
    #[prop(into)] current_state: Signal<ArticleState>,
    on_set: Callback<ArticleState>,
) -> impl IntoView {
    let form = RwSignal::new(ParamsFormState::seeded(current_state.get_untracked()));
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let is_open = Signal::derive(move || form.get().is_open());

    use_dismiss(
        is_open,
        root_ref,
        PointerTrigger::MouseDown,
        DismissBehavior::new().on_close(move || form.update(ParamsFormState::close)),
    );

    let draft_field =
        move |field: ArticleField| Signal::derive(move || form.with(|f| f.draft.get(field)));
    let select_field = move |field: ArticleField| {
        Callback::new(move |opt: ArticleOption| form.update(|f| f.select(field, opt)))
    };

    let on_toggle = Callback::new(move |open: bool| form.update(|f| f.set_open(open)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let committed = form.with_untracked(ParamsFormState::submit);
        log::debug!("article settings applied: {committed:?}");
        on_set.run(committed);
    };

    let on_reset = move |ev: leptos::ev::Event| {
        ev.prevent_default();
        let committed = form.try_update(ParamsFormState::reset).unwrap_or(ArticleState::DEFAULT);
        log::debug!("article settings reset to defaults");
        on_set.run(committed);
    };

    view! {
        <div class="article-params" node_ref=root_ref>
            <ArrowButton is_open=is_open on_click=on_toggle/>
            <aside class="article-params__container" class:article-params__container--open=move || is_open.get()>
                <form class="article-params__form" on:submit=on_submit on:reset=on_reset>
                    <Text heading=true uppercase=true size=31 weight=800>
                        "Set parameters"
                    </Text>
                    <Select
                        title=ArticleField::FontFamily.title()
                        options=ArticleField::FontFamily.options()
                        selected=draft_field(ArticleField::FontFamily)
                        on_change=select_field(ArticleField::FontFamily)
                    />
                    <RadioGroup
                        name="font-size"
                        title=ArticleField::FontSize.title()
                        options=ArticleField::FontSize.options()
                        selected=draft_field(ArticleField::FontSize)
                        on_change=select_field(ArticleField::FontSize)
                    />
                    <Select
                        title=ArticleField::FontColor.title()
                        options=ArticleField::FontColor.options()
                        selected=draft_field(ArticleField::FontColor)
                        on_change=select_field(ArticleField::FontColor)
                    />
                    <Separator/>
                    <Select
                        title=ArticleField::BackgroundColor.title()
                        options=ArticleField::BackgroundColor.options()
                        selected=draft_field(ArticleField::BackgroundColor)
                        on_change=select_field(ArticleField::BackgroundColor)
                    />
                    <Select
                        title=ArticleField::ContentWidth.title()
                        options=ArticleField::ContentWidth.options()
                        selected=draft_field(ArticleField::ContentWidth)
                        on_change=select_field(ArticleField::ContentWidth)
                    />
                    <div class="article-params__bottom">
                        <Button title="Reset" kind=ButtonKind::Reset/>
                        <Button title="Apply" kind=ButtonKind::Submit/>
                    </div>
                </form>
            </aside>
        </div>
    }
}
