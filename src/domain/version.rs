// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient semantic-version coercion.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Finds the first run of one to three dot-separated numeric components.
static COERCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{1,16})(?:\.([0-9]{1,16}))?(?:\.([0-9]{1,16}))?(?:$|[^0-9])")
        .expect("version coercion pattern is valid")
});

/// A `major.minor.patch` triple.
///
/// # Examples
///
/// ```
/// use hexenv::domain::Version;
///
/// let version = Version::coerce("v2.1").unwrap();
/// assert_eq!(version, Version::new(2, 1, 0));
/// assert_eq!(version.to_string(), "2.1.0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major component
    pub major: u64,
    /// Minor component
    pub minor: u64,
    /// Patch component
    pub patch: u64,
}

impl Version {
    /// Creates a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Extracts a version from loosely formatted text.
    ///
    /// Leading and trailing text is ignored and missing components default to
    /// `0`, so `"v3"`, `"release-3.2"` and `"3.2.1-beta"` all coerce. Returns
    /// `None` when the text contains no digits.
    pub fn coerce(text: &str) -> Option<Self> {
        let captures = COERCE_RE.captures(text)?;
        let component = |index: usize| {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(0)
        };

        Some(Version::new(component(1), component(2), component(3)))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
