// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the environment service.
//!
//! `Env` is defined in [`env`]; the other modules each add one group of
//! operations to it.

pub mod accessors;
pub mod api_version;
pub mod classify;
pub mod env;
pub mod loader;
pub mod locale;

// Re-export commonly used types
pub use api_version::ApiVersionOptions;
pub use env::{Env, EnvBuilder};
