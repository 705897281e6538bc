//! Page-level route components.

pub mod reader;
