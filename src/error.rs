//! Error types for schema-probe
//!
//! All public APIs return `Result<T, Error>` where `Error` is defined here.
//! Every failure aborts the current run; nothing here is retryable.

use thiserror::Error;

/// The main error type for schema-probe
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Flag / Option Errors
    // ============================================================================
    #[error("Invalid type mapping: {token}")]
    InvalidTypeMapping { token: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open '{path}': {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to close {handle} handle: {source}")]
    FileClose {
        handle: &'static str,
        source: std::io::Error,
    },

    // ============================================================================
    // Conversion Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Failed to encode value: {message}")]
    Encoding { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Schema inference failed: {message}")]
    SchemaInference { message: String },

    #[error("No CSV record produced from input fragment")]
    NoCsvRecord,

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize schema: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an invalid type mapping error
    pub fn invalid_type_mapping(token: impl Into<String>) -> Self {
        Self::InvalidTypeMapping {
            token: token.into(),
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file close error for the named handle
    pub fn file_close(handle: &'static str, source: std::io::Error) -> Self {
        Self::FileClose { handle, source }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a schema inference error
    pub fn schema_inference(message: impl Into<String>) -> Self {
        Self::SchemaInference {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type alias for schema-probe
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_type_mapping("badtoken");
        assert_eq!(err.to_string(), "Invalid type mapping: badtoken");

        let err = Error::key_not_found("status");
        assert_eq!(err.to_string(), "Key not found: status");

        let err = Error::schema_inference("column 'baz' not found in input");
        assert_eq!(
            err.to_string(),
            "Schema inference failed: column 'baz' not found in input"
        );

        assert_eq!(
            Error::NoCsvRecord.to_string(),
            "No CSV record produced from input fragment"
        );
    }

    #[test]
    fn test_file_errors_carry_path_and_handle() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_open("/tmp/in.json", source);
        assert!(err.to_string().contains("/tmp/in.json"));

        let source = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::file_close("output", source);
        assert!(err.to_string().contains("output handle"));
    }
}
