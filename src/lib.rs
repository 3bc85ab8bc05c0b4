// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for typed environment-variable access.
//!
//! This crate reads environment variables, optionally seeded once from a `.env`
//! file, and coerces them into strings, numbers, booleans, lists and JSON
//! objects. It also classifies the deployment environment from `NODE_ENV`,
//! derives API version tags from `API_VERSION`, and resolves a locale and
//! country code.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and coercions (`EnvKey`, `EnvValue`, `Version`, errors)
//! - **Ports**: Trait definitions (`EnvStore`, `EnvFileSource`, `LocaleProvider`)
//! - **Adapters**: Implementations (process environment, in-memory store, dotenv, locale)
//! - **Service**: `Env`, which ties a store, a file source and a locale provider together
//!
//! # Lookup Rules
//!
//! - Lookups never fail. Unset variables yield the default; malformed numbers
//!   yield `NaN`; malformed objects yield the default object.
//! - Scalar accessors treat an empty variable as unset.
//! - List accessors trim, drop empty items and remove duplicates. By default the
//!   list default is merged in front of the environment items.
//! - The `.env` file is read at most once and never overrides variables that
//!   are already set.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexenv::prelude::*;
//!
//! let port = hexenv::get_number_or("PORT", 5000.0);
//! let locales = hexenv::get_array_or("LOCALES", "sw");
//! let version = hexenv::api_version(&ApiVersionOptions::default());
//!
//! if hexenv::is_production() {
//!     println!("serving {} on {} ({:?})", version, port, locales);
//! }
//! ```
//!
//! For isolated access, for example in tests, build an [`Env`](service::Env)
//! over a [`MemoryStore`](adapters::MemoryStore) instead of using the
//! process-wide functions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod global;
pub mod ports;
pub mod service;

pub use global::{
    api_version, clear, get, get_array, get_array_or, get_array_with, get_boolean,
    get_boolean_or, get_country_code, get_locale, get_number, get_number_or, get_numbers,
    get_numbers_or, get_numbers_with, get_object, get_object_or, get_or, get_string,
    get_string_or, get_string_set, get_string_set_or, get_string_set_with, get_strings,
    get_strings_or, get_strings_with, is, is_development, is_heroku, is_local, is_production,
    is_test, load, set,
};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        DotenvFileSource, FixedLocale, MemoryStore, ProcessEnvStore, SystemLocale,
    };
    pub use crate::domain::{
        EnvError, EnvKey, EnvValue, ListDefault, ListOptions, LoadReport, LoadResult, Object,
        Result, Version,
    };
    pub use crate::ports::{EnvFileSource, EnvStore, LocaleProvider};
    pub use crate::service::{ApiVersionOptions, Env, EnvBuilder};
}
