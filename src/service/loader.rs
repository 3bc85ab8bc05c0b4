// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time seeding of the store from a `.env` file.

use crate::domain::{EnvError, EnvKey, EnvValue, LoadReport, LoadResult, Result};
use crate::service::Env;
use std::path::PathBuf;
use std::sync::Arc;

/// Directory holding the env file; defaults to the working directory.
pub const BASE_PATH: &str = "BASE_PATH";

/// Name of the deployment environment (`development`, `test`, `production`, ...).
pub const NODE_ENV: &str = "NODE_ENV";

/// `NODE_ENV` written by the loader when the variable is unset.
pub const DEFAULT_NODE_ENV: &str = "development";

impl Env {
    /// Loads the env file into the store, once.
    ///
    /// The first call resolves the base directory (`BASE_PATH`, else the
    /// working directory), reads `<base>/.env` and inserts every entry whose
    /// key is not already set. It then sets `NODE_ENV` to `development` and
    /// `BASE_PATH` to the absolute base directory if either is unset. Existing
    /// keys are never overwritten.
    ///
    /// Every later call returns a copy of the first result without touching the
    /// filesystem. Concurrent first callers block until one of them finishes.
    ///
    /// A missing file is not an error. An unreadable file is, and that error is
    /// what every later call returns as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryStore;
    /// use hexenv::service::Env;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// std::fs::write(dir.path().join(".env"), "PORT=5000\n").unwrap();
    ///
    /// let store = MemoryStore::from_pairs([("BASE_PATH", dir.path().to_str().unwrap())]);
    /// let env = Env::builder().with_store(Box::new(store)).build();
    ///
    /// let report = env.load().unwrap();
    /// assert!(report.found);
    /// assert_eq!(env.get_number("PORT"), Some(5000.0));
    /// ```
    pub fn load(&self) -> LoadResult {
        self.ensure_loaded().clone()
    }

    /// Returns the memoized load result, running the load on first use.
    pub(crate) fn ensure_loaded(&self) -> &LoadResult {
        self.loaded.get_or_init(|| {
            let result = self.load_env_file().map_err(Arc::new);
            match &result {
                Ok(report) => tracing::debug!(
                    "Loaded env file {} into '{}' store (found={}, inserted={}, skipped={}, seeded={})",
                    report.path.display(),
                    self.store.name(),
                    report.found,
                    report.inserted.len(),
                    report.skipped.len(),
                    report.seeded.len()
                ),
                Err(e) => tracing::warn!("Failed to load env file: {}", e),
            }
            result
        })
    }

    fn load_env_file(&self) -> Result<LoadReport> {
        let base = self.base_dir()?;
        let path = base.join(&self.filename);

        let mut report = LoadReport {
            path: path.clone(),
            ..LoadReport::default()
        };

        if let Some(entries) = self.file_source.read(&path)? {
            report.found = true;
            for (key, value) in entries {
                if self.store.contains(&key) {
                    report.skipped.push(key);
                    continue;
                }
                match self.store.set(&key, value) {
                    Ok(()) => report.inserted.push(key),
                    Err(e) => tracing::warn!("Skipping env file entry: {}", e),
                }
            }
            if !report.changed() {
                tracing::debug!(
                    "Env file {} added no keys ({} already set)",
                    path.display(),
                    report.skipped.len()
                );
            }
        }

        self.seed_default(NODE_ENV, DEFAULT_NODE_ENV, &mut report);
        self.seed_default(BASE_PATH, &base.to_string_lossy(), &mut report);

        Ok(report)
    }

    fn seed_default(&self, key: &str, value: &str, report: &mut LoadReport) {
        let key = EnvKey::from(key);
        if self.store.contains(&key) {
            return;
        }
        match self.store.set(&key, EnvValue::from(value)) {
            Ok(()) => report.seeded.push(key),
            Err(e) => tracing::warn!("Failed to seed '{}': {}", key, e),
        }
    }

    /// Resolves the directory holding the env file as an absolute path.
    fn base_dir(&self) -> Result<PathBuf> {
        let configured = self
            .store
            .get_str(BASE_PATH)
            .filter(EnvValue::is_truthy)
            .map(|v| PathBuf::from(v.into_string()));

        match configured {
            Some(path) if path.is_absolute() => Ok(path),
            Some(path) => Ok(current_dir()?.join(path)),
            None => current_dir(),
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(EnvError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::ports::EnvFileSource;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FailingSource {
        reads: Arc<AtomicUsize>,
    }

    impl EnvFileSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn read(&self, path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Err(EnvError::FileSource {
                source_name: "failing".to_string(),
                path: path.to_path_buf(),
                message: "permission denied".to_string(),
                source: None,
            })
        }
    }

    struct CountingSource {
        reads: Arc<AtomicUsize>,
    }

    impl EnvFileSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn read(&self, _path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    #[test]
    fn test_failed_load_is_memoized() {
        let reads = Arc::new(AtomicUsize::new(0));
        let env = Env::builder()
            .with_store(Box::new(MemoryStore::from_pairs([("BASE_PATH", "/srv/app")])))
            .with_file_source(Box::new(FailingSource {
                reads: Arc::clone(&reads),
            }))
            .build();

        let first = env.load().unwrap_err();
        let second = env.load().unwrap_err();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_does_not_break_lookups() {
        let env = Env::builder()
            .with_store(Box::new(MemoryStore::from_pairs([
                ("BASE_PATH", "/srv/app"),
                ("PORT", "8080"),
            ])))
            .with_file_source(Box::new(FailingSource::default()))
            .build();

        assert_eq!(env.get_number("PORT"), Some(8080.0));
        assert!(env.load().is_err());
    }

    #[test]
    fn test_relative_base_path_resolves_against_cwd() {
        let reads = Arc::new(AtomicUsize::new(0));
        let env = Env::builder()
            .with_store(Box::new(MemoryStore::from_pairs([("BASE_PATH", "config")])))
            .with_file_source(Box::new(CountingSource {
                reads: Arc::clone(&reads),
            }))
            .build();

        let report = env.load().unwrap();
        let expected = std::env::current_dir().unwrap().join("config").join(".env");
        assert_eq!(report.path, expected);
        assert!(!report.found);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    struct FixedEntries;

    impl EnvFileSource for FixedEntries {
        fn name(&self) -> &str {
            "fixed"
        }

        fn read(&self, _path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
            Ok(Some(vec![(EnvKey::from("PORT"), EnvValue::from("5000"))]))
        }
    }

    #[test]
    fn test_file_with_only_existing_keys_changes_nothing() {
        let env = Env::builder()
            .with_store(Box::new(MemoryStore::from_pairs([
                ("BASE_PATH", "/srv/app"),
                ("NODE_ENV", "test"),
                ("PORT", "8080"),
            ])))
            .with_file_source(Box::new(FixedEntries))
            .build();

        let report = env.load().unwrap();
        assert!(report.found);
        assert!(!report.changed());
        assert_eq!(report.skipped, vec![EnvKey::from("PORT")]);
        assert!(report.seeded.is_empty());
        assert_eq!(env.get_number("PORT"), Some(8080.0));
    }
}
