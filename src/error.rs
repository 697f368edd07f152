//! Unified error handling for the panel-extraction pipeline.
//!
//! This mirrors the teacher crate's hand-rolled error enum: a single type for
//! every fatal condition, with manual `Display`/`Error` impls instead of
//! pulling in `thiserror`.

use std::fmt;

/// Unified error type for panel-extraction operations.
#[derive(Debug, Clone)]
pub enum PanelError {
    /// Input bytes could not be decoded as an image.
    NotAnImage { path: String },
    /// Unknown reading direction was requested.
    InvalidNumbering { value: String },
    /// The `<image>.license` sidecar exists but is not valid JSON.
    InvalidLicense { path: String, message: String },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::NotAnImage { path } => {
                write!(f, "File '{}' is not an image", path)
            }
            PanelError::InvalidNumbering { value } => {
                write!(f, "Fatal error, unknown numbering: {}", value)
            }
            PanelError::InvalidLicense { path, message } => {
                write!(f, "License file '{}' is not a valid JSON file: {}", path, message)
            }
        }
    }
}

impl std::error::Error for PanelError {}

/// Result type alias for panel-extraction operations.
pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::InvalidNumbering { value: "ttb".to_string() };
        assert!(err.to_string().contains("ttb"));
    }
}
