// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store adapter.
//!
//! An isolated key-value table with the same contract as the process
//! environment. Tests use it so they can run in parallel without touching
//! process state.

use crate::domain::{EnvKey, EnvValue, Result};
use crate::ports::EnvStore;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Store adapter over a private `HashMap`.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryStore;
/// use hexenv::ports::EnvStore;
///
/// let store = MemoryStore::from_pairs([("LOCALES", "en,sw,fr")]);
/// assert_eq!(store.get_str("LOCALES").unwrap().as_str(), "en,sw,fr");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `values`.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }

    /// Creates a store from key-value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_values(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EnvStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &EnvKey) -> Option<EnvValue> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key.as_str())
            .map(EnvValue::from)
    }

    fn set(&self, key: &EnvKey, value: EnvValue) -> Result<()> {
        key.validate()?;
        value.validate(key.as_str())?;
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.as_str().to_string(), value.into_string());
        Ok(())
    }

    fn remove(&self, key: &EnvKey) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key.as_str());
    }
}
