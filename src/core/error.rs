//! Error types for the palette tool
//!
//! This module defines the error type shared by the color, generator and
//! store modules. Configuration has its own error type in `core::config`.

use thiserror::Error;

/// Main error type for palette operations
#[derive(Error, Debug)]
pub enum PaletteError {
    /// A hex color string could not be parsed
    #[error("Invalid hex color '{0}'. Expected 6 hex digits, e.g. #1a2b3c")]
    InvalidHex(String),

    /// Requested palette size is outside the allowed range
    #[error("Invalid color count {count}: must be between {min} and {max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// Reading from or writing to the storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encoding palettes to JSON failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No saved palette matches the given id
    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PaletteError>;

impl From<std::io::Error> for PaletteError {
    fn from(err: std::io::Error) -> Self {
        PaletteError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        PaletteError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_count_message() {
        let err = PaletteError::InvalidCount {
            count: 42,
            min: 1,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid color count 42: must be between 1 and 10"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: PaletteError = io.into();
        assert!(matches!(err, PaletteError::Io(ref msg) if msg.contains("nope")));
    }
}
