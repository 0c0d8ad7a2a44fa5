//! Error types for mdhighlight
//!
//! Highlighting itself never fails; these errors cover the edges around
//! it (configuration files, color values).

use thiserror::Error;

/// Result type alias for mdhighlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color value: {0}")]
    InvalidColor(String),

    #[error("invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },
}
