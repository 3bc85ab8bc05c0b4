// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host locale adapters.

use crate::ports::LocaleProvider;
use std::env;

/// POSIX locale variables, in order of precedence.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale provider reading the POSIX locale variables of the process.
///
/// The first non-empty of `LC_ALL`, `LC_MESSAGES` and `LANG` is used, with any
/// `.codeset` and `@modifier` suffix removed. The `C` and `POSIX` locales carry
/// no language and are reported as unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocale;

impl SystemLocale {
    /// Creates a new system locale provider.
    pub fn new() -> Self {
        SystemLocale
    }
}

impl LocaleProvider for SystemLocale {
    fn name(&self) -> &str {
        "system"
    }

    fn locale(&self) -> Option<String> {
        LOCALE_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| normalize_locale(&value))
    }
}

/// Strips codeset and modifier from a POSIX locale name.
fn normalize_locale(raw: &str) -> Option<String> {
    let name = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match name {
        "" | "C" | "POSIX" => None,
        _ => Some(name.to_string()),
    }
}

/// Locale provider returning a fixed answer, for tests and embedded targets.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::FixedLocale;
/// use hexenv::ports::LocaleProvider;
///
/// assert_eq!(FixedLocale::new("en_US").locale().as_deref(), Some("en_US"));
/// assert_eq!(FixedLocale::unknown().locale(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    /// A provider that always reports `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        FixedLocale(Some(locale.into()))
    }

    /// A provider that never knows the locale.
    pub fn unknown() -> Self {
        FixedLocale(None)
    }
}

impl LocaleProvider for FixedLocale {
    fn name(&self) -> &str {
        "fixed"
    }

    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_codeset_and_modifier() {
        assert_eq!(normalize_locale("en_US.UTF-8").as_deref(), Some("en_US"));
        assert_eq!(normalize_locale("de_DE@euro").as_deref(), Some("de_DE"));
        assert_eq!(normalize_locale("sw_TZ.UTF-8@x").as_deref(), Some("sw_TZ"));
    }

    #[test]
    fn test_normalize_posix_locales_are_unknown() {
        assert_eq!(normalize_locale("C"), None);
        assert_eq!(normalize_locale("C.UTF-8"), None);
        assert_eq!(normalize_locale("POSIX"), None);
        assert_eq!(normalize_locale(""), None);
    }

    #[test]
    fn test_normalize_plain_language() {
        assert_eq!(normalize_locale("sw").as_deref(), Some("sw"));
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(SystemLocale::new().name(), "system");
        assert_eq!(FixedLocale::unknown().name(), "fixed");
    }
}
