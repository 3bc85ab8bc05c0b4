// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the environment crate.
//!
//! Lookups never fail: absent keys resolve to defaults and malformed values
//! resolve to sentinels. The errors below surface only from operations that can
//! genuinely be refused, such as writing an invalid key or reading an
//! unreadable `.env` file.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for environment operations.
///
/// # Examples
///
/// ```
/// use hexenv::domain::errors::EnvError;
///
/// let error = EnvError::InvalidKey {
///     key: "A=B".to_string(),
///     reason: "contains '='",
/// };
/// assert_eq!(error.to_string(), "Invalid environment key 'A=B': contains '='");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// The key cannot be stored in an environment table.
    #[error("Invalid environment key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Why the key was rejected
        reason: &'static str,
    },

    /// The value cannot be stored in an environment table.
    #[error("Invalid value for environment key '{key}': {reason}")]
    InvalidValue {
        /// The key the value was destined for
        key: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Failed to convert a raw value to the requested type.
    #[error("Failed to convert environment value for key '{key}' to type {target_type}: {source}")]
    TypeConversion {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An env file exists but could not be read.
    #[error("Env file source '{source_name}' failed to read {}: {message}", .path.display())]
    FileSource {
        /// The name of the file source adapter
        source_name: String,
        /// The file that was being read
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred, e.g. while resolving the working directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_error() {
        let error = EnvError::InvalidValue {
            key: "NAME".to_string(),
            reason: "contains a NUL byte",
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for environment key 'NAME': contains a NUL byte"
        );
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = EnvError::TypeConversion {
            key: "PORT".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("PORT"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_file_source_error() {
        let error = EnvError::FileSource {
            source_name: "dotenv".to_string(),
            path: PathBuf::from("/srv/app/.env"),
            message: "permission denied".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Env file source 'dotenv' failed to read /srv/app/.env: permission denied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "cwd removed");
        let error = EnvError::from(io_error);
        assert!(matches!(error, EnvError::Io(_)));
    }
}
