// SPDX-License-Identifier: MIT OR Apache-2.0

//! API version tags derived from a semantic version.

use crate::domain::Version;
use crate::service::Env;
use serde::{Deserialize, Deserializer};

/// Variable holding the deployed API version.
pub const API_VERSION: &str = "API_VERSION";

const FALLBACK_VERSION: Version = Version::new(1, 0, 0);

/// How to render an API version tag.
///
/// Deserializing a partial object fills the missing fields with defaults, and
/// `version` may be given as a string or a number.
///
/// # Examples
///
/// ```rust
/// use hexenv::service::ApiVersionOptions;
///
/// let options: ApiVersionOptions = serde_json::from_str(r#"{"version": 2, "minor": true}"#).unwrap();
/// assert_eq!(options.version, "2");
/// assert_eq!(options.prefix, "v");
/// assert!(options.minor);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiVersionOptions {
    /// Version used when `API_VERSION` is unset or empty.
    #[serde(deserialize_with = "version_text")]
    pub version: String,
    /// Text placed before the version numbers.
    pub prefix: String,
    /// Include the major component. The major component is always rendered.
    pub major: bool,
    /// Include the minor component.
    pub minor: bool,
    /// Include the minor and patch components. Takes precedence over `minor`.
    pub patch: bool,
}

impl ApiVersionOptions {
    /// Sets the fallback version.
    pub fn version(mut self, version: impl ToString) -> Self {
        self.version = version.to_string();
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets whether to include the major component.
    pub fn major(mut self, enabled: bool) -> Self {
        self.major = enabled;
        self
    }

    /// Sets whether to include the minor component.
    pub fn minor(mut self, enabled: bool) -> Self {
        self.minor = enabled;
        self
    }

    /// Sets whether to include the patch component.
    pub fn patch(mut self, enabled: bool) -> Self {
        self.patch = enabled;
        self
    }

    /// Renders `version` according to these options.
    pub fn format(&self, version: &Version) -> String {
        let numbers = if self.patch {
            format!("{}.{}.{}", version.major, version.minor, version.patch)
        } else if self.minor {
            format!("{}.{}", version.major, version.minor)
        } else {
            version.major.to_string()
        };
        format!("{}{}", self.prefix, numbers)
    }
}

impl Default for ApiVersionOptions {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            prefix: "v".to_string(),
            major: true,
            minor: false,
            patch: false,
        }
    }
}

fn version_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum VersionInput {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match VersionInput::deserialize(deserializer)? {
        VersionInput::Text(text) => text,
        VersionInput::Number(number) => number.to_string(),
    })
}

impl Env {
    /// Derives an API version tag such as `v1`, `v1.2` or `v1.2.3`.
    ///
    /// The version is read from `API_VERSION`, falling back to
    /// `options.version`, and coerced leniently. If neither coerces, `1.0.0`
    /// is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryStore;
    /// use hexenv::service::{ApiVersionOptions, Env};
    ///
    /// let env = Env::builder().with_store(Box::new(MemoryStore::new())).build();
    ///
    /// assert_eq!(env.api_version(&ApiVersionOptions::default()), "v1");
    /// assert_eq!(env.api_version(&ApiVersionOptions::default().minor(true)), "v1.0");
    /// assert_eq!(env.api_version(&ApiVersionOptions::default().version(2)), "v2");
    /// ```
    pub fn api_version(&self, options: &ApiVersionOptions) -> String {
        let text = self.get_string_or(API_VERSION, options.version.as_str());
        let version = Version::coerce(&text)
            .or_else(|| Version::coerce(&options.version))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Cannot derive a version from '{}'; using {}",
                    text,
                    FALLBACK_VERSION
                );
                FALLBACK_VERSION
            });

        options.format(&version)
    }
}
