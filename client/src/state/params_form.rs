//! Settings panel state: open/closed flag plus the uncommitted draft.
//!
//! DESIGN
//! ======
//! The draft is a full `ArticleState` owned by the form. It is never shared
//! with the shell; `submit` and `reset` hand out a copy that the caller commits.
//! Panel visibility and draft fields are independent: closing the panel keeps
//! the draft, and committing never closes the panel.

#[cfg(test)]
#[path = "params_form_test.rs"]
mod params_form_test;

use super::article::{ArticleField, ArticleOption, ArticleState};

/// Visibility of the settings side panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Local state of the article settings form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamsFormState {
    pub panel: PanelState,
    pub draft: ArticleState,
}

impl Default for ParamsFormState {
    fn default() -> Self {
        Self::seeded(ArticleState::DEFAULT)
    }
}

impl ParamsFormState {
    /// Closed panel with a draft copied from the currently applied state.
    pub fn seeded(applied: ArticleState) -> Self {
        Self { panel: PanelState::Closed, draft: applied }
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn toggle(&mut self) {
        self.panel = match self.panel {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
    }

    /// Set visibility explicitly; used by the toggle button which reports the
    /// state it wants next.
    pub fn set_open(&mut self, open: bool) {
        self.panel = if open { PanelState::Open } else { PanelState::Closed };
    }

    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
    }

    /// Replace one draft field.
    pub fn select(&mut self, field: ArticleField, option: ArticleOption) {
        self.draft.set(field, option);
    }

    /// Snapshot of the draft to commit.
    pub fn submit(&self) -> ArticleState {
        self.draft
    }

    /// Restore the draft to defaults and return the state to commit.
    pub fn reset(&mut self) -> ArticleState {
        self.draft = ArticleState::DEFAULT;
        self.draft
    }
}
