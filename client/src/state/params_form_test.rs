use super::*;
use crate::state::article::{BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS};

fn option(field: ArticleField, value: &str) -> ArticleOption {
    field.find(value).unwrap()
}

// =============================================================
// Panel transitions
// =============================================================

#[test]
fn form_starts_closed_with_default_draft() {
    let form = ParamsFormState::default();
    assert_eq!(form.panel, PanelState::Closed);
    assert!(!form.is_open());
    assert_eq!(form.draft, ArticleState::DEFAULT);
}

#[test]
fn seeded_copies_applied_state_into_draft() {
    let mut applied = ArticleState::DEFAULT;
    applied.set(ArticleField::FontSize, FONT_SIZE_OPTIONS[2]);
    let form = ParamsFormState::seeded(applied);
    assert_eq!(form.draft, applied);
    assert!(!form.is_open());
}

#[test]
fn toggle_alternates_open_and_closed() {
    let mut form = ParamsFormState::default();
    form.toggle();
    assert!(form.is_open());
    form.toggle();
    assert!(!form.is_open());
}

#[test]
fn set_open_and_close_are_explicit() {
    let mut form = ParamsFormState::default();
    form.set_open(true);
    assert_eq!(form.panel, PanelState::Open);
    form.set_open(true);
    assert_eq!(form.panel, PanelState::Open);
    form.close();
    assert_eq!(form.panel, PanelState::Closed);
    form.close();
    assert_eq!(form.panel, PanelState::Closed);
}

#[test]
fn draft_survives_close_and_reopen() {
    let mut form = ParamsFormState::default();
    form.toggle();
    form.select(ArticleField::BackgroundColor, BACKGROUND_COLORS[3]);
    form.close();
    form.toggle();
    assert_eq!(form.draft.background_color, BACKGROUND_COLORS[3]);
}

// =============================================================
// Field selection
// =============================================================

#[test]
fn select_updates_only_the_chosen_field() {
    for field in ArticleField::ALL {
        let mut form = ParamsFormState::default();
        let before = form.draft;
        let chosen = *field.options().last().unwrap();
        form.select(field, chosen);
        for other in ArticleField::ALL {
            if other == field {
                assert_eq!(form.draft.get(other), chosen);
            } else {
                assert_eq!(form.draft.get(other), before.get(other), "{field:?} leaked into {other:?}");
            }
        }
    }
}

#[test]
fn select_does_not_change_panel_state() {
    let mut form = ParamsFormState::default();
    form.select(ArticleField::FontColor, FONT_COLORS[2]);
    assert!(!form.is_open());
    form.toggle();
    form.select(ArticleField::FontColor, FONT_COLORS[3]);
    assert!(form.is_open());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_returns_current_draft() {
    let mut form = ParamsFormState::default();
    form.select(ArticleField::ContentWidth, CONTENT_WIDTHS[1]);
    let committed = form.submit();
    assert_eq!(committed, form.draft);
    assert_eq!(committed.content_width.value, "948px");
}

#[test]
fn submit_is_idempotent_for_unchanged_draft() {
    let mut form = ParamsFormState::default();
    form.select(ArticleField::FontFamily, FONT_FAMILY_OPTIONS[2]);
    let first = form.submit();
    for _ in 0..10 {
        assert_eq!(form.submit(), first);
    }
}

#[test]
fn committed_state_is_not_affected_by_later_edits() {
    let mut form = ParamsFormState::default();
    form.select(ArticleField::FontSize, FONT_SIZE_OPTIONS[1]);
    let committed = form.submit();
    form.select(ArticleField::FontSize, FONT_SIZE_OPTIONS[2]);
    assert_eq!(committed.font_size, FONT_SIZE_OPTIONS[1]);
    assert_eq!(form.draft.font_size, FONT_SIZE_OPTIONS[2]);
}

#[test]
fn submit_keeps_panel_open() {
    let mut form = ParamsFormState::default();
    form.toggle();
    let _ = form.submit();
    assert!(form.is_open());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_defaults_from_any_draft() {
    for field in ArticleField::ALL {
        for opt in field.options() {
            let mut form = ParamsFormState::default();
            form.select(field, *opt);
            form.select(ArticleField::FontColor, FONT_COLORS[5]);
            let committed = form.reset();
            assert_eq!(committed, ArticleState::DEFAULT);
            assert_eq!(form.draft, ArticleState::DEFAULT);
        }
    }
}

#[test]
fn reset_keeps_panel_state() {
    let mut form = ParamsFormState::default();
    form.toggle();
    let _ = form.reset();
    assert!(form.is_open());

    form.close();
    let _ = form.reset();
    assert!(!form.is_open());
}

// =============================================================
// End to end
// =============================================================

#[test]
fn open_edit_submit_scenario() {
    let mut applied = ArticleState::default();
    assert_eq!(applied.font_family.value, "Open Sans");
    assert_eq!(applied.font_size.value, "18px");

    let mut form = ParamsFormState::seeded(applied);
    form.toggle();
    form.select(ArticleField::FontFamily, option(ArticleField::FontFamily, "PT Mono"));
    form.select(ArticleField::FontSize, option(ArticleField::FontSize, "24px"));
    applied = form.submit();

    assert_eq!(applied.font_family.value, "PT Mono");
    assert_eq!(applied.font_size.value, "24px");
    assert_eq!(applied.font_color, ArticleState::DEFAULT.font_color);
    assert!(form.is_open());
}
