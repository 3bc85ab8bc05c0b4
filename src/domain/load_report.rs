// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome of seeding an environment store from a `.env` file.

use crate::domain::env_key::EnvKey;
use crate::domain::errors::EnvError;
use std::path::PathBuf;
use std::sync::Arc;

/// What a completed load did to the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The candidate `.env` path.
    pub path: PathBuf,
    /// Whether a file existed at `path`.
    pub found: bool,
    /// Keys taken from the file and written to the store.
    pub inserted: Vec<EnvKey>,
    /// Keys present in the file but left alone because the store already had them.
    pub skipped: Vec<EnvKey>,
    /// Process defaults written because they were unset (`NODE_ENV`, `BASE_PATH`).
    pub seeded: Vec<EnvKey>,
}

impl LoadReport {
    /// Returns `true` if the file contributed at least one key.
    pub fn changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

/// The memoized result of a load.
///
/// The error is shared so every caller after the first receives the same failure.
pub type LoadResult = std::result::Result<LoadReport, Arc<EnvError>>;
