// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deployment environment predicates.
//!
//! Predicates read the store on every call, so a change to `NODE_ENV` is seen by
//! the next call.

use crate::service::loader::NODE_ENV;
use crate::service::Env;

/// Name of the hosting platform, e.g. `heroku`.
pub const RUNTIME_ENV: &str = "RUNTIME_ENV";

impl Env {
    fn matches_ignore_case(&self, key: &str, expected: &str) -> bool {
        self.get(key).unwrap_or_default().to_lowercase() == expected.to_lowercase()
    }

    /// Returns `true` if `NODE_ENV` equals `name`, ignoring case.
    ///
    /// An unset `NODE_ENV` compares as the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryStore;
    /// use hexenv::service::Env;
    ///
    /// let store = MemoryStore::from_pairs([("NODE_ENV", "Test")]);
    /// let env = Env::builder().with_store(Box::new(store)).build();
    ///
    /// assert!(env.is("TEST"));
    /// assert!(env.is_test());
    /// assert!(env.is_local());
    /// assert!(!env.is_production());
    /// ```
    pub fn is(&self, name: &str) -> bool {
        self.matches_ignore_case(NODE_ENV, name)
    }

    /// Returns `true` in the `test` environment.
    pub fn is_test(&self) -> bool {
        self.is("test")
    }

    /// Returns `true` in the `development` environment.
    pub fn is_development(&self) -> bool {
        self.is("development")
    }

    /// Returns `true` in the `production` environment.
    pub fn is_production(&self) -> bool {
        self.is("production")
    }

    /// Returns `true` in the `test` or `development` environment.
    pub fn is_local(&self) -> bool {
        self.is_test() || self.is_development()
    }

    /// Returns `true` if `RUNTIME_ENV` is `heroku`, ignoring case.
    pub fn is_heroku(&self) -> bool {
        self.matches_ignore_case(RUNTIME_ENV, "heroku")
    }
}
