//! Partsguard error types.
//!
//! Classifier operations (`test`, `replace`, `wrap`, the identity checks)
//! are total and never return these errors. [`GuardError`] covers the
//! fallible plumbing around them: loading configuration, building the
//! pattern table and running the HTTP sidecar.
//!
//! Rejections of user input are not errors of this kind; they are reported
//! through [`crate::validation::ValidationError`], whose messages are meant
//! to be shown to the end user.

use thiserror::Error;

/// Partsguard errors.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The static pattern table failed to compile.
    #[error("Pattern table error: {0}")]
    Pattern(String),

    /// Server-side error.
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for partsguard operations
pub type Result<T> = std::result::Result<T, GuardError>;

impl From<toml::de::Error> for GuardError {
    fn from(err: toml::de::Error) -> Self {
        GuardError::Config(err.to_string())
    }
}

impl From<regex::Error> for GuardError {
    fn from(err: regex::Error) -> Self {
        GuardError::Pattern(err.to_string())
    }
}
