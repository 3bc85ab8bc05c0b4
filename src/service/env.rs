// SPDX-License-Identifier: MIT OR Apache-2.0

//! The environment service.
//!
//! `Env` owns a store, the `.env` file source that seeds it and a locale
//! provider. Its methods are spread over the sibling modules: typed accessors,
//! the one-time loader, environment classification, API versioning and locale
//! helpers.

use crate::adapters::{DotenvFileSource, ProcessEnvStore, SystemLocale};
use crate::domain::LoadResult;
use crate::ports::{EnvFileSource, EnvStore, LocaleProvider};
use once_cell::sync::OnceCell;

/// Name of the file the loader looks for in the base directory.
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Typed access to an environment store.
///
/// Every accessor first makes sure the `.env` file has been loaded, so a fresh
/// process sees file-based values on its first lookup.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryStore;
/// use hexenv::service::Env;
///
/// let env = Env::builder()
///     .with_store(Box::new(MemoryStore::from_pairs([("AGE", "14")])))
///     .build();
///
/// assert_eq!(env.get_number("AGE"), Some(14.0));
/// ```
pub struct Env {
    pub(crate) store: Box<dyn EnvStore>,
    pub(crate) file_source: Box<dyn EnvFileSource>,
    pub(crate) locale: Box<dyn LocaleProvider>,
    pub(crate) filename: String,
    pub(crate) loaded: OnceCell<LoadResult>,
}

impl Env {
    /// Creates a service over the process environment, seeded from `.env`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder.
    pub fn builder() -> EnvBuilder {
        EnvBuilder::new()
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &dyn EnvStore {
        self.store.as_ref()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an `Env`.
///
/// Unset parts default to the process environment, [`DotenvFileSource`] and
/// [`SystemLocale`].
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::{FixedLocale, MemoryStore};
/// use hexenv::service::EnvBuilder;
///
/// let env = EnvBuilder::new()
///     .with_store(Box::new(MemoryStore::new()))
///     .with_locale_provider(Box::new(FixedLocale::new("en_GB")))
///     .with_filename(".env.test")
///     .build();
///
/// assert_eq!(env.get_country_code("TZ"), "GB");
/// ```
pub struct EnvBuilder {
    store: Option<Box<dyn EnvStore>>,
    file_source: Option<Box<dyn EnvFileSource>>,
    locale: Option<Box<dyn LocaleProvider>>,
    filename: String,
}

impl EnvBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            store: None,
            file_source: None,
            locale: None,
            filename: DEFAULT_ENV_FILENAME.to_string(),
        }
    }

    /// Uses `store` instead of the process environment.
    pub fn with_store(mut self, store: Box<dyn EnvStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses `file_source` to read the env file.
    pub fn with_file_source(mut self, file_source: Box<dyn EnvFileSource>) -> Self {
        self.file_source = Some(file_source);
        self
    }

    /// Uses `locale` to detect the host locale.
    pub fn with_locale_provider(mut self, locale: Box<dyn LocaleProvider>) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Looks for `filename` in the base directory instead of `.env`.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Builds the service. Nothing is read until the first lookup or `load()`.
    pub fn build(self) -> Env {
        Env {
            store: self
                .store
                .unwrap_or_else(|| Box::new(ProcessEnvStore::new())),
            file_source: self
                .file_source
                .unwrap_or_else(|| Box::new(DotenvFileSource::new())),
            locale: self.locale.unwrap_or_else(|| Box::new(SystemLocale::new())),
            filename: self.filename,
            loaded: OnceCell::new(),
        }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn test_builder_defaults() {
        let env = EnvBuilder::default().build();
        assert_eq!(env.store().name(), "process");
        assert_eq!(env.file_source.name(), "dotenv");
        assert_eq!(env.locale.name(), "system");
        assert_eq!(env.filename, ".env");
        assert!(env.loaded.get().is_none());
    }

    #[test]
    fn test_builder_with_store() {
        let env = Env::builder()
            .with_store(Box::new(MemoryStore::new()))
            .build();
        assert_eq!(env.store().name(), "memory");
    }

    #[test]
    fn test_env_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Env>();
    }
}
