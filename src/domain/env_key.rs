// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment key newtype for type-safe key handling.

use crate::domain::errors::{EnvError, Result};
use std::fmt;

/// A type-safe wrapper for environment variable names.
///
/// # Examples
///
/// ```
/// use hexenv::domain::env_key::EnvKey;
///
/// let key = EnvKey::from("NODE_ENV");
/// assert_eq!(key.as_str(), "NODE_ENV");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvKey(String);

impl EnvKey {
    /// Creates a new `EnvKey` from a `String`.
    pub fn new(key: String) -> Self {
        EnvKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `EnvKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Checks that the key can be written to an operating-system environment.
    ///
    /// Empty keys and keys containing `=` or a NUL byte are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::env_key::EnvKey;
    ///
    /// assert!(EnvKey::from("PORT").validate().is_ok());
    /// assert!(EnvKey::from("A=B").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let reason = if self.0.is_empty() {
            "key is empty"
        } else if self.0.contains('=') {
            "contains '='"
        } else if self.0.contains('\0') {
            "contains a NUL byte"
        } else {
            return Ok(());
        };

        Err(EnvError::InvalidKey {
            key: self.0.clone(),
            reason,
        })
    }
}

impl From<String> for EnvKey {
    fn from(s: String) -> Self {
        EnvKey(s)
    }
}

impl From<&str> for EnvKey {
    fn from(s: &str) -> Self {
        EnvKey(s.to_string())
    }
}

impl From<EnvKey> for String {
    fn from(key: EnvKey) -> Self {
        key.0
    }
}

impl AsRef<str> for EnvKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_key_into_string() {
        let key = EnvKey::from("BASE_PATH");
        assert_eq!(key.into_string(), "BASE_PATH");
    }

    #[test]
    fn test_env_key_display() {
        let key = EnvKey::new("RUNTIME_ENV".to_string());
        assert_eq!(format!("{}", key), "RUNTIME_ENV");
    }

    #[test]
    fn test_env_key_hash() {
        let mut map = HashMap::new();
        map.insert(EnvKey::from("PORT"), "5000");

        assert_eq!(map.get(&EnvKey::from("PORT")), Some(&"5000"));
        assert_eq!(map.get(&EnvKey::from("HOST")), None);
    }

    #[test]
    fn test_env_key_validate_rejects_empty() {
        let err = EnvKey::from("").validate().unwrap_err();
        assert!(err.to_string().contains("key is empty"));
    }

    #[test]
    fn test_env_key_validate_rejects_nul() {
        assert!(EnvKey::from("BAD\0KEY").validate().is_err());
    }

    #[test]
    fn test_env_key_validate_accepts_lowercase_and_dots() {
        assert!(EnvKey::from("app.name").validate().is_ok());
    }
}
