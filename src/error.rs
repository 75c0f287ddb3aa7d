//! Error types for report generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A glob failed to compile. Raised before any traversal starts.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// Fatal I/O, such as an inaccessible root. Listing failures below the
    /// root are logged and truncate the affected subtree instead.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller abandoned the operation; nothing is rendered.
    #[error("operation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
