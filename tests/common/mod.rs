// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use hexenv::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A file source that never finds a file.
#[allow(dead_code)]
pub struct NoFile;

impl EnvFileSource for NoFile {
    fn name(&self) -> &str {
        "none"
    }

    fn read(&self, _path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
        Ok(None)
    }
}

/// Wraps the dotenv source and counts how often it is asked to read.
#[allow(dead_code)]
pub struct CountingSource {
    inner: DotenvFileSource,
    reads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: DotenvFileSource::new(),
            reads: Arc::clone(&reads),
        };
        (source, reads)
    }
}

impl EnvFileSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn read(&self, path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read(path)
    }
}

/// Routes `tracing` output to the test harness so it is shown for failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Builds an isolated `Env` over an in-memory store holding `pairs`.
#[allow(dead_code)]
pub fn memory_env(pairs: &[(&str, &str)]) -> Env {
    Env::builder()
        .with_store(Box::new(MemoryStore::from_pairs(pairs.iter().copied())))
        .with_file_source(Box::new(NoFile))
        .with_locale_provider(Box::new(FixedLocale::unknown()))
        .build()
}
