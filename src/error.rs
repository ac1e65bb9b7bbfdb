//! Error types for repopack.

use thiserror::Error;

use crate::init::prompt::PromptError;

/// Result type alias using repopack's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while initializing a configuration file.
#[derive(Error, Debug)]
pub enum Error {
    /// The interactive prompt failed or was cancelled.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
