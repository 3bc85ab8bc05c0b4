// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces between the environment service and the
//! outside world: the key-value store, the `.env` file reader and the host
//! locale. Adapters in the adapters layer implement them.

pub mod file_source;
pub mod locale;
pub mod store;

// Re-export commonly used types
pub use file_source::EnvFileSource;
pub use locale::LocaleProvider;
pub use store::EnvStore;
