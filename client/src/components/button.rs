//! Form button.

use leptos::prelude::*;

/// HTML `type` of a form button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[component]
pub fn Button(#[prop(into)] title: String, #[prop(optional)] kind: ButtonKind) -> impl IntoView {
    let is_submit = kind == ButtonKind::Submit;
    view! {
        <button class="button" class:button--submit=is_submit type=kind.as_attr()>
            {title}
        </button>
    }
}
