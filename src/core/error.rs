//! # Error Handling Module
//!
//! Error types for the edges of the transcoder: reading documents, parsing them,
//! and loading configuration. Built on the `thiserror` crate.
//!
//! The transcoding engine itself (`oas::*::fill` / `extract_to`) never fails. Every
//! legacy field has a well-defined default and every modern field maps to one, so
//! those operations return `()` and malformed values simply flow through. Only the
//! code that turns bytes into typed values can produce a `TranscoderError`.

use thiserror::Error;

/// Main result type used throughout the transcoder
pub type TranscoderResult<T> = Result<T, TranscoderError>;

/// Error types for the transcoder's I/O and configuration surface
///
/// The `#[error("...")]` attribute from `thiserror` implements `Display`
/// with the given message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscoderError {
    /// Configuration-related errors (invalid values, unreadable config file, etc.)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O errors while reading or writing documents
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// YAML serialization/deserialization errors
    #[error("YAML error: {message}")]
    Yaml { message: String },

    /// A document format that cannot be inferred or is not supported
    #[error("Unsupported document format: {format}")]
    UnsupportedFormat { format: String },
}

impl TranscoderError {
    /// Create a configuration error with a custom message
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with a custom message
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Get a string representation of the error type for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration_error",
            Self::Io { .. } => "io_error",
            Self::Json { .. } => "json_error",
            Self::Yaml { .. } => "yaml_error",
            Self::UnsupportedFormat { .. } => "unsupported_format",
        }
    }
}

/// Implement conversion from std::io::Error
impl From<std::io::Error> for TranscoderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Implement conversion from serde_json::Error
impl From<serde_json::Error> for TranscoderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

/// Implement conversion from serde_yaml::Error
impl From<serde_yaml::Error> for TranscoderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: err.to_string(),
        }
    }
}
