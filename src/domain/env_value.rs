// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment value type with lenient coercions.
//!
//! This module provides the `EnvValue` type, which wraps the raw string stored in an
//! environment table. Coercions here never fail: a value that does not look like a
//! number becomes `NaN`, a value that is not a JSON object yields `None`, and so on.
//! Strict conversions are available through [`EnvValue::parse`].

use crate::domain::errors::{EnvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structured object decoded from a JSON-valued variable.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// A raw environment value.
///
/// Values are always stored as strings. Numbers, booleans and sequences are
/// converted to their storable representation on the way in (see the `From`
/// implementations) and coerced back on the way out.
///
/// # Examples
///
/// ```
/// use hexenv::domain::env_value::EnvValue;
///
/// let value = EnvValue::from("14");
/// assert_eq!(value.as_number(), 14.0);
///
/// let stored = EnvValue::from(vec!["en", "sw"]);
/// assert_eq!(stored.as_str(), "en,sw");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvValue(String);

impl EnvValue {
    /// Creates a new `EnvValue` from a `String`.
    pub fn new(value: String) -> Self {
        EnvValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` unless the value is the empty string.
    ///
    /// Scalar accessors treat a present-but-empty variable as unset and fall back
    /// to the caller's default.
    pub fn is_truthy(&self) -> bool {
        !self.0.is_empty()
    }

    /// Coerces the value to a number.
    ///
    /// Surrounding whitespace is ignored, an empty value is `0`, and `0x`, `0o`
    /// and `0b` prefixes select a radix. `Infinity` may carry a sign. Anything
    /// else that is not a decimal literal yields `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::env_value::EnvValue;
    ///
    /// assert_eq!(EnvValue::from(" 55.11 ").as_number(), 55.11);
    /// assert_eq!(EnvValue::from("0x10").as_number(), 16.0);
    /// assert!(EnvValue::from("fourteen").as_number().is_nan());
    /// ```
    pub fn as_number(&self) -> f64 {
        coerce_number(&self.0)
    }

    /// Coerces the value to a boolean.
    ///
    /// The literal `"false"` and the empty string are `false`; everything else is
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::env_value::EnvValue;
    ///
    /// assert!(EnvValue::from("yes").as_boolean());
    /// assert!(!EnvValue::from("false").as_boolean());
    /// ```
    pub fn as_boolean(&self) -> bool {
        match self.0.as_str() {
            "false" | "" => false,
            _ => true,
        }
    }

    /// Splits the value on commas into trimmed, non-empty items.
    ///
    /// Duplicates are kept; list accessors remove them after merging defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::env_value::EnvValue;
    ///
    /// let items = EnvValue::from("14,15, 16,,").split_list();
    /// assert_eq!(items, vec!["14", "15", "16"]);
    /// ```
    pub fn split_list(&self) -> Vec<String> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Decodes the value as a JSON object.
    ///
    /// Returns `None` if the value is not valid JSON or is valid JSON of another
    /// shape (array, string, number, ...).
    pub fn as_object(&self) -> Option<Object> {
        match serde_json::from_str::<serde_json::Value>(&self.0) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Value is not a JSON object: {}", e);
                None
            }
        }
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// Unlike the lenient coercions, this reports a conversion failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::env_value::EnvValue;
    /// use std::net::IpAddr;
    ///
    /// let value = EnvValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("HOST").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0.parse::<T>().map_err(|e| EnvError::TypeConversion {
            key: key.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(e),
        })
    }

    /// Checks that the value can be written to an operating-system environment.
    pub fn validate(&self, key: &str) -> Result<()> {
        if self.0.contains('\0') {
            return Err(EnvError::InvalidValue {
                key: key.to_string(),
                reason: "contains a NUL byte",
            });
        }
        Ok(())
    }
}

/// Coerces a string to a number the way loosely typed configuration expects.
pub(crate) fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return coerce_radix(&s[2..], radix);
    }

    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    let decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Accumulates prefixed digits into an `f64`, so literals wider than 64 bits stay
/// finite. Any sign or non-digit makes the whole value `NaN`.
fn coerce_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Formats a number in its shortest storable form (`14`, not `14.0`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl From<String> for EnvValue {
    fn from(s: String) -> Self {
        EnvValue(s)
    }
}

impl From<&str> for EnvValue {
    fn from(s: &str) -> Self {
        EnvValue(s.to_string())
    }
}

impl From<&String> for EnvValue {
    fn from(s: &String) -> Self {
        EnvValue(s.clone())
    }
}

impl From<bool> for EnvValue {
    fn from(b: bool) -> Self {
        EnvValue(b.to_string())
    }
}

impl From<f64> for EnvValue {
    fn from(n: f64) -> Self {
        EnvValue(format_number(n))
    }
}

impl From<f32> for EnvValue {
    fn from(n: f32) -> Self {
        EnvValue(format_number(f64::from(n)))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for EnvValue {
                fn from(n: $t) -> Self {
                    EnvValue(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<EnvValue>> From<Vec<T>> for EnvValue {
    fn from(items: Vec<T>) -> Self {
        let joined = items
            .into_iter()
            .map(|item| item.into().into_string())
            .collect::<Vec<_>>()
            .join(",");
        EnvValue(joined)
    }
}

impl From<EnvValue> for String {
    fn from(value: EnvValue) -> Self {
        value.0
    }
}

impl AsRef<str> for EnvValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
