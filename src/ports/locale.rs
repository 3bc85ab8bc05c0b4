// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale provider trait definition.

/// Reports the locale of the host system, such as `en_US` or `sw-TZ`.
pub trait LocaleProvider: Send + Sync {
    /// Returns the name of this provider.
    fn name(&self) -> &str;

    /// Returns the host locale, or `None` if it cannot be determined.
    fn locale(&self) -> Option<String>;
}
