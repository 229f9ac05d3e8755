//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for capture parsing.
///
/// Only the top-level structure is strict: the document must be valid JSON
/// and must contain a `log.entries` array. Everything below that level
/// defaults to empty values instead of failing.
#[derive(Error, Debug)]
pub enum CaptureParseError {
    /// The input is not a valid JSON document.
    #[error("Capture is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level `log` field is missing.
    #[error("Capture has no top-level \"log\" object")]
    MissingLog,

    /// The `log.entries` field is missing or is not an array.
    #[error("Capture has no \"log.entries\" array")]
    MissingEntries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            CaptureParseError::MissingLog.to_string(),
            "Capture has no top-level \"log\" object"
        );
        assert_eq!(
            CaptureParseError::MissingEntries.to_string(),
            "Capture has no \"log.entries\" array"
        );
    }

    #[test]
    fn test_invalid_json_carries_source_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CaptureParseError::from(source);
        assert!(err.to_string().starts_with("Capture is not valid JSON:"));
    }
}
