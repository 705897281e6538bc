//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `article` holds the option model shared by the shell and the form;
//! `params_form` holds the settings panel's local draft and visibility.

pub mod article;
pub mod params_form;
