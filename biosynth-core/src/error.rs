//! Structured error types for the biosynth workspace.

use thiserror::Error;

/// Unified error type for all biosynth operations.
#[derive(Debug, Error)]
pub enum BiosynthError {
    /// I/O error while reading user input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed command-line or text input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument, such as a mutation rate outside `[0, 1]`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A byte outside the expected alphabet reached a sequence boundary.
    #[error("invalid {alphabet} character {found:?} at position {position}")]
    InvalidAlphabet {
        alphabet: &'static str,
        found: char,
        position: usize,
    },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BiosynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_error_names_byte_and_position() {
        let err = BiosynthError::InvalidAlphabet {
            alphabet: "DNA",
            found: 'X',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid DNA character 'X' at position 3");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BiosynthError = io.into();
        assert!(matches!(err, BiosynthError::Io(_)));
    }
}
