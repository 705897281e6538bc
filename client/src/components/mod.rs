//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `article_params_form` is the only stateful component; the rest are thin
//! presentational pieces it composes, plus the static article body.

pub mod arrow_button;
pub mod article;
pub mod article_params_form;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;
