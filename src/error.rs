//! # Error Types
//!
//! This module defines error types used throughout the escpos-builder library.

use thiserror::Error;

/// Main error type for escpos-builder operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// A raw value (name or byte) that maps to no known enum variant
    #[error("Unrecognized {kind}: {value}")]
    Unrecognized { kind: &'static str, value: String },

    /// Text contains a character the active encoding cannot represent
    #[error("Cannot encode {character:?} in {encoding}")]
    Unencodable {
        encoding: &'static str,
        character: char,
    },

    /// The encoding name has no transcoder behind it
    #[error("Unsupported text encoding: {0}")]
    UnsupportedEncoding(&'static str),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EscPosError {
    pub(crate) fn unrecognized(kind: &'static str, value: impl ToString) -> Self {
        Self::Unrecognized {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_message() {
        let err = EscPosError::unrecognized("text font", 42);
        assert_eq!(err.to_string(), "Unrecognized text font: 42");
    }

    #[test]
    fn test_unencodable_message() {
        let err = EscPosError::Unencodable {
            encoding: "CP437",
            character: '★',
        };
        assert_eq!(err.to_string(), "Cannot encode '★' in CP437");
    }
}
