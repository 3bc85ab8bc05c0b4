// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: stores over the process environment or a private map, the
//! dotenv file reader, and host locale providers.

pub mod dotenv_file;
pub mod memory;
pub mod process_env;
pub mod system_locale;

pub use dotenv_file::DotenvFileSource;
pub use memory::MemoryStore;
pub use process_env::ProcessEnvStore;
pub use system_locale::{FixedLocale, SystemLocale};
