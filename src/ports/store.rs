// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment store trait definition.
//!
//! This module defines the `EnvStore` trait, the port through which every lookup and
//! mutation reaches the key-value table. The process environment is one
//! implementation; an in-memory map is another, used to isolate tests.

use crate::domain::{EnvKey, EnvValue, Result};

/// A mutable table of string keys to string values.
///
/// Stores use interior mutability so a single store can be shared behind `&self`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so an `Env` can live in a process-wide
/// static.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::EnvStore;
/// use hexenv::domain::{EnvKey, EnvValue, Result};
///
/// struct EmptyStore;
///
/// impl EnvStore for EmptyStore {
///     fn name(&self) -> &str {
///         "empty"
///     }
///
///     fn get(&self, _key: &EnvKey) -> Option<EnvValue> {
///         None
///     }
///
///     fn set(&self, _key: &EnvKey, _value: EnvValue) -> Result<()> {
///         Ok(())
///     }
///
///     fn remove(&self, _key: &EnvKey) {}
/// }
///
/// assert!(!EmptyStore.contains(&EnvKey::from("PORT")));
/// ```
pub trait EnvStore: Send + Sync {
    /// Returns the name of this store, used in log messages.
    fn name(&self) -> &str;

    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &EnvKey) -> Option<EnvValue>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidKey` or `EnvError::InvalidValue` if the entry
    /// cannot be represented in this store.
    fn set(&self, key: &EnvKey, value: EnvValue) -> Result<()>;

    /// Removes `key`. Removing an absent key does nothing.
    fn remove(&self, key: &EnvKey);

    /// Returns `true` if `key` is present, even with an empty value.
    fn contains(&self, key: &EnvKey) -> bool {
        self.get(key).is_some()
    }

    /// Retrieves a value by string key.
    ///
    /// Equivalent to `get(&EnvKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<EnvValue> {
        self.get(&EnvKey::from(key))
    }
}
