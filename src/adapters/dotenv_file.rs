// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv file source adapter.
//!
//! Parses `.env` files with `dotenvy`, which handles comments, blank lines,
//! single and double quotes, `export` prefixes and `${VAR}` substitution.

use crate::domain::{EnvError, EnvKey, EnvValue, Result};
use crate::ports::EnvFileSource;
use std::path::Path;

/// Maximum number of malformed lines reported individually before summarising.
const MAX_REPORTED_PARSE_ERRORS: usize = 8;

/// File source adapter for dotenv-formatted files.
///
/// Reading is best-effort: a line that fails to parse is skipped with a warning
/// and the remaining lines are still returned. Only a file that cannot be opened
/// (for a reason other than not existing) is an error.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::DotenvFileSource;
/// use hexenv::ports::EnvFileSource;
/// use std::io::Write;
///
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, "# settings\nPORT=5000\nNAME=\"env demo\"").unwrap();
///
/// let entries = DotenvFileSource::new().read(file.path()).unwrap().unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].1.as_str(), "env demo");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DotenvFileSource;

impl DotenvFileSource {
    /// Creates a new dotenv file source.
    pub fn new() -> Self {
        DotenvFileSource
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    fn source_error(&self, path: &Path, err: dotenvy::Error) -> EnvError {
        EnvError::FileSource {
            source_name: self.name().to_string(),
            path: path.to_path_buf(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl EnvFileSource for DotenvFileSource {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn read(&self, path: &Path) -> Result<Option<Vec<(EnvKey, EnvValue)>>> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!("No env file at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.source_error(path, e)),
        };

        let mut entries = Vec::new();
        let mut malformed = 0usize;

        for item in iter {
            match item {
                Ok((key, value)) => entries.push((EnvKey::from(key), EnvValue::from(value))),
                Err(dotenvy::Error::LineParse(_, index)) => {
                    // Line contents may hold secrets; only the position is logged.
                    malformed += 1;
                    if malformed <= MAX_REPORTED_PARSE_ERRORS {
                        tracing::warn!(
                            "Skipping malformed line in {} (error at index {})",
                            path.display(),
                            index
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Stopped reading {} after {} entries: {}",
                        path.display(),
                        entries.len(),
                        e
                    );
                    break;
                }
            }
        }

        if malformed > MAX_REPORTED_PARSE_ERRORS {
            tracing::warn!(
                "Skipped {} malformed lines in {}",
                malformed,
                path.display()
            );
        }

        tracing::debug!("Read {} entries from {}", entries.len(), path.display());
        Ok(Some(entries))
    }
}
