// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale and country code resolution.

use crate::service::Env;

/// Locale used when neither the host nor the environment provides one.
pub const DEFAULT_LOCALE: &str = "sw";

/// Country code used when the locale carries no region.
pub const DEFAULT_COUNTRY_CODE: &str = "TZ";

/// Variable overriding the detected locale.
pub const DEFAULT_LOCALE_VAR: &str = "DEFAULT_LOCALE";

/// Variable overriding the derived country code.
pub const DEFAULT_COUNTRY_CODE_VAR: &str = "DEFAULT_COUNTRY_CODE";

impl Env {
    /// Returns the locale: the host locale, else `default`, unless
    /// `DEFAULT_LOCALE` is set.
    pub fn get_locale(&self, default: &str) -> String {
        let detected = self
            .locale
            .locale()
            .filter(|locale| !locale.is_empty())
            .unwrap_or_else(|| default.to_string());

        self.get_string_or(DEFAULT_LOCALE_VAR, detected)
    }

    /// Returns the country code: the region of the resolved locale, else
    /// `default`, unless `DEFAULT_COUNTRY_CODE` is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::{FixedLocale, MemoryStore};
    /// use hexenv::service::Env;
    ///
    /// let env = Env::builder()
    ///     .with_store(Box::new(MemoryStore::new()))
    ///     .with_locale_provider(Box::new(FixedLocale::new("en-KE")))
    ///     .build();
    ///
    /// assert_eq!(env.get_locale("sw"), "en-KE");
    /// assert_eq!(env.get_country_code("TZ"), "KE");
    /// ```
    pub fn get_country_code(&self, default: &str) -> String {
        let locale = self.get_locale(DEFAULT_LOCALE);
        let derived = region_of(&locale).unwrap_or(default).to_string();

        self.get_string_or(DEFAULT_COUNTRY_CODE_VAR, derived)
    }

    /// Returns the locale with `sw` as the default.
    pub fn get_locale_or_default(&self) -> String {
        self.get_locale(DEFAULT_LOCALE)
    }

    /// Returns the country code with `TZ` as the default.
    pub fn get_country_code_or_default(&self) -> String {
        self.get_country_code(DEFAULT_COUNTRY_CODE)
    }
}

/// Returns the segment after the last `-` in `locale`, or after the last `_` if
/// there is no `-`. `zh_Hant-TW` yields `TW`.
fn region_of(locale: &str) -> Option<&str> {
    locale
        .rsplit_once('-')
        .or_else(|| locale.rsplit_once('_'))
        .map(|(_, region)| region)
        .filter(|region| !region.is_empty())
}
