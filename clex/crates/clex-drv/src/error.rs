//! Error handling for the clex driver.
//!
//! Everything here is fatal: it stops the run before or instead of a
//! report. Lexical problems in the analyzed source are diagnostics, not
//! errors, and never surface through this type.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the clex driver.
#[derive(Error, Debug)]
pub enum ClexError {
    /// No input file on the command line.
    #[error("No input file specified")]
    MissingInput,

    /// The input file could not be opened.
    #[error("Unable to open file '{}'", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is missing, unreadable, or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the JSON report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClexError {
    /// Extra guidance printed after the error line, if any.
    pub fn usage_hint(&self) -> Option<String> {
        match self {
            ClexError::MissingInput => Some(format!("Usage: {} <filename.c>", crate::BIN_NAME)),
            _ => None,
        }
    }
}

/// Result type alias using ClexError.
pub type Result<T> = std::result::Result<T, ClexError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = ClexError::MissingInput;
        assert_eq!(err.to_string(), "No input file specified");
        assert_eq!(err.usage_hint().as_deref(), Some("Usage: clex <filename.c>"));
    }

    #[test]
    fn test_open_input_keeps_source() {
        let err = ClexError::OpenInput {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "Unable to open file 'missing.c'");
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("No such file or directory")
        );
        assert!(err.usage_hint().is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = ClexError::Config("max_token_length must be between 2 and 4096".into());
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ClexError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, ClexError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
