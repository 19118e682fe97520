//! Error types for `classgen`.
//!
//! Validation failures are the only recoverable kind: the binary reports them
//! to the user and exits with status 1 before anything touches the disk.
//! Every other variant is fatal.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the generation pipeline.
#[derive(Debug, Error)]
pub enum ClassgenError {
    /// Input rejected before any file was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Filesystem failure while preparing the output directory or writing a
    /// generated file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation targeted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing user-facing text to standard output failed.
    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

/// Input values that fail the naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The class name does not match `^[A-Z][A-Za-z0-9]*$`.
    #[error("Invalid class name '{0}'")]
    InvalidClassName(String),
    /// A file extension is empty or contains non-alphanumeric characters.
    #[error("Invalid file extension '{0}'")]
    InvalidExtension(String),
}

impl ValidationError {
    /// Returns the follow-up line explaining the rule that was broken.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::InvalidClassName(_) => {
                "Class name should start with an uppercase letter and contain only alphanumeric characters."
            }
            Self::InvalidExtension(_) => {
                "File extensions must be non-empty and contain only ASCII alphanumeric characters."
            }
        }
    }
}
