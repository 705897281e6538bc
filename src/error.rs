//! Top-level server error.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded (missing or malformed
    /// `[workspace.metadata.leptos]` / `LEPTOS_*` variables).
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
