//! Error types for Markdown parsing

use thiserror::Error;

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while loading Markdown source
#[derive(Debug, Error)]
pub enum ParseError {
    /// Source file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
