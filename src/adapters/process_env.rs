// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment store adapter.
//!
//! This module provides a store backed by the environment of the running
//! process, read and written through `std::env`.

use crate::domain::{EnvKey, EnvValue, Result};
use crate::ports::EnvStore;
use std::env;

/// Store adapter over the process environment.
///
/// Reads see changes made by any code in the process, so classification
/// predicates observe a `NODE_ENV` changed mid-run. Values that are not valid
/// UTF-8 are converted lossily.
///
/// `std::env::set_var` panics on keys that are empty or contain `=` or NUL. This
/// adapter validates first and returns an error instead, and treats such keys
/// as absent on reads and removals.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::ProcessEnvStore;
/// use hexenv::domain::EnvKey;
/// use hexenv::ports::EnvStore;
///
/// let store = ProcessEnvStore::new();
/// assert!(store.set(&EnvKey::from("A=B"), "x".into()).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvStore;

impl ProcessEnvStore {
    /// Creates a new process environment store.
    pub fn new() -> Self {
        ProcessEnvStore
    }
}

impl EnvStore for ProcessEnvStore {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &EnvKey) -> Option<EnvValue> {
        key.validate().ok()?;
        env::var_os(key.as_str()).map(|v| EnvValue::from(v.to_string_lossy().into_owned()))
    }

    fn set(&self, key: &EnvKey, value: EnvValue) -> Result<()> {
        key.validate()?;
        value.validate(key.as_str())?;
        env::set_var(key.as_str(), value.as_str());
        tracing::debug!("Set process environment variable '{}'", key);
        Ok(())
    }

    fn remove(&self, key: &EnvKey) {
        if key.validate().is_err() {
            return;
        }
        env::remove_var(key.as_str());
    }
}
