// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value types shared by every other layer: keys, raw
//! values and their coercions, list defaults, versions, load reports and errors.
//! It has no knowledge of where values are stored.

pub mod env_key;
pub mod env_value;
pub mod errors;
pub mod list;
pub mod load_report;
pub mod version;

// Re-export commonly used types
pub use env_key::EnvKey;
pub use env_value::{EnvValue, Object};
pub use errors::{EnvError, Result};
pub use list::{ListDefault, ListOptions};
pub use load_report::{LoadReport, LoadResult};
pub use version::Version;
