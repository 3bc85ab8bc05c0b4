// SPDX-License-Identifier: MIT OR Apache-2.0

//! Env file source trait definition.

use crate::domain::{EnvKey, EnvValue, Result};
use std::path::Path;

/// Reads `KEY=VALUE` entries from a file.
///
/// The loader calls [`read`](EnvFileSource::read) at most once per `Env`, so a
/// counting implementation can verify that memoization holds.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::EnvFileSource;
/// use hexenv::domain::{EnvKey, EnvValue, Result};
/// use std::path::Path;
///
/// struct Fixed;
///
/// impl EnvFileSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self, _path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
///         Ok(Some(vec![(EnvKey::from("PORT"), EnvValue::from("5000"))]))
///     }
/// }
///
/// let entries = Fixed.read(Path::new(".env")).unwrap().unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub trait EnvFileSource: Send + Sync {
    /// Returns the name of this source, used in log and error messages.
    fn name(&self) -> &str;

    /// Reads the entries of the file at `path`, in file order.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(entries))` - The file exists; unparseable lines are omitted
    /// * `Ok(None)` - There is no file at `path`
    /// * `Err(EnvError)` - The file exists but could not be read
    fn read(&self, path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>>;
}
