use super::*;
use crate::state::article::{CONTENT_WIDTHS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS};

#[test]
fn preview_class_appends_option_class() {
    assert_eq!(preview_class(FONT_FAMILY_OPTIONS[0]), "select__preview font-open-sans");
}

#[test]
fn preview_class_without_option_class() {
    assert_eq!(preview_class(FONT_SIZE_OPTIONS[1]), "select__preview");
}

#[test]
fn option_row_class_uses_option_class_name() {
    assert_eq!(option_row_class(CONTENT_WIDTHS[1]), "select__option option-narrow");
    assert_eq!(option_row_class(FONT_FAMILY_OPTIONS[2]), "select__option");
}
