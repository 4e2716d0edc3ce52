//! Error handling for specview
//!
//! This module defines the application error type and a Result alias for use
//! throughout the crate.

use thiserror::Error;

/// Main error type for specview operations
#[derive(Error, Debug)]
pub enum SpecViewError {
    /// Errors launching or running the external scanner process
    #[error("Scanner source error: {0}")]
    Source(String),

    /// Format violations in the scanner's output stream
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for specview operations
pub type Result<T> = std::result::Result<T, SpecViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecViewError::Protocol("unexpected line: \"a b c\"".to_string());
        assert_eq!(
            err.to_string(),
            "Protocol violation: unexpected line: \"a b c\""
        );
    }

    #[test]
    fn test_source_error_display() {
        let err = SpecViewError::Source("ubertooth-specan not found on PATH".to_string());
        assert!(err.to_string().contains("ubertooth-specan"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SpecViewError = io.into();
        assert!(matches!(err, SpecViewError::Io(_)));
    }
}
