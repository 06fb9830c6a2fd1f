//! Error types.
//!
//! Each operation has its own error type. Name resolution has none at all:
//! an unsupported digest is reported as an empty name.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a test-vector file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("Failed to read test vectors from {}: {source}", .path.display())]
    Io {
        /// Resolved file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit
    #[error("Test vector file {} is too large: {size} > {limit} bytes", .path.display())]
    FileTooLarge {
        /// Resolved file path
        path: PathBuf,
        /// File size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: usize,
    },

    /// File content is not UTF-8
    #[error("Test vector file {} is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        /// Resolved file path
        path: PathBuf,
        /// Decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// File content is not valid JSON
    #[error("Failed to parse test vectors from {}: {source}", .path.display())]
    Parse {
        /// Resolved file path
        path: PathBuf,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object
    #[error("Test vector file {} does not contain a JSON object", .path.display())]
    NotAnObject {
        /// Resolved file path
        path: PathBuf,
    },
}

impl LoadError {
    /// Path the loader tried to read.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::InvalidUtf8 { path, .. }
            | Self::Parse { path, .. }
            | Self::NotAnObject { path } => path,
        }
    }

    /// True if the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Errors from reading fields of a test-vector document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Required field is absent
    #[error("Missing field: {field}")]
    MissingField {
        /// Field name
        field: String,
    },

    /// Field is present with the wrong JSON type
    #[error("Field {field} is not {expected}")]
    WrongType {
        /// Field name
        field: String,
        /// Expected JSON type
        expected: &'static str,
    },

    /// Test case `result` is not one of valid/invalid/acceptable
    #[error("Unknown test result: {value}")]
    UnknownResult {
        /// Value found in the document
        value: String,
    },
}

/// Unrecognised curve name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown curve name: {name}")]
pub struct UnknownCurveError {
    /// Name as given by the caller
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display_names_path() {
        let err = LoadError::Io {
            path: PathBuf::from("vectors/ecdsa_test.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("vectors/ecdsa_test.json"));
        assert!(msg.contains("no such file"));
        assert!(err.is_not_found());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_permission_denied_is_not_not_found() {
        let err = LoadError::Io {
            path: PathBuf::from("x.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.path(), std::path::Path::new("x.json"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = LoadError::FileTooLarge { path: PathBuf::from("big.json"), size: 11, limit: 10 };
        assert_eq!(format!("{err}"), "Test vector file big.json is too large: 11 > 10 bytes");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::MissingField { field: "generatorVersion".to_string() };
        assert_eq!(format!("{err}"), "Missing field: generatorVersion");

        let err = DocumentError::WrongType { field: "algorithm".to_string(), expected: "a string" };
        assert_eq!(format!("{err}"), "Field algorithm is not a string");
    }

    #[test]
    fn test_unknown_curve_display() {
        let err = UnknownCurveError { name: "brainpoolP256r1".to_string() };
        assert_eq!(format!("{err}"), "Unknown curve name: brainpoolP256r1");
        assert!(err.source().is_none());
    }
}
