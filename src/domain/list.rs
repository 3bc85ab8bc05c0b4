// SPDX-License-Identifier: MIT OR Apache-2.0

//! Defaults and options for list-valued lookups.
//!
//! A list lookup may be given a scalar default (`"it"`, `17`) or a sequence
//! default (`vec!["it", "en"]`). [`ListDefault`] normalises both into a sequence
//! of strings before any merging happens.

use crate::domain::env_value::EnvValue;
use std::collections::HashSet;

/// A list default, normalised to a sequence of strings.
///
/// # Examples
///
/// ```
/// use hexenv::domain::ListDefault;
///
/// assert_eq!(ListDefault::from("it").as_slice(), ["it"]);
/// assert_eq!(ListDefault::from(vec![17, 18]).as_slice(), ["17", "18"]);
/// assert!(ListDefault::none().as_slice().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListDefault(Vec<String>);

impl ListDefault {
    /// An empty default.
    pub fn none() -> Self {
        ListDefault(Vec::new())
    }

    /// Returns the normalised items.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Converts the default into its items.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    fn scalar(value: impl Into<EnvValue>) -> Self {
        ListDefault(vec![value.into().into_string()])
    }
}

impl From<()> for ListDefault {
    fn from(_: ()) -> Self {
        ListDefault::none()
    }
}

impl From<&str> for ListDefault {
    fn from(s: &str) -> Self {
        ListDefault::scalar(s)
    }
}

impl From<String> for ListDefault {
    fn from(s: String) -> Self {
        ListDefault::scalar(s)
    }
}

impl From<bool> for ListDefault {
    fn from(b: bool) -> Self {
        ListDefault::scalar(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ListDefault {
                fn from(n: $t) -> Self {
                    ListDefault::scalar(n)
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<EnvValue>> From<Vec<T>> for ListDefault {
    fn from(items: Vec<T>) -> Self {
        ListDefault(
            items
                .into_iter()
                .map(|item| item.into().into_string())
                .collect(),
        )
    }
}

impl<T: Into<EnvValue> + Clone> From<&[T]> for ListDefault {
    fn from(items: &[T]) -> Self {
        ListDefault::from(items.to_vec())
    }
}

impl<T: Into<EnvValue>, const N: usize> From<[T; N]> for ListDefault {
    fn from(items: [T; N]) -> Self {
        ListDefault::from(Vec::from(items))
    }
}

impl<T: Into<ListDefault>> From<Option<T>> for ListDefault {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Options for list-valued lookups.
///
/// With `merge` enabled (the default) the default items come first, followed by
/// the items parsed from the environment. With `merge` disabled a present
/// variable replaces the default entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListOptions {
    /// Whether to combine the default with the environment value.
    pub merge: bool,
}

impl ListOptions {
    /// Options that combine default and environment items.
    pub fn merged() -> Self {
        ListOptions { merge: true }
    }

    /// Options under which a present variable replaces the default.
    pub fn replace() -> Self {
        ListOptions { merge: false }
    }

    /// Sets whether to merge.
    pub fn merge(mut self, enabled: bool) -> Self {
        self.merge = enabled;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions::merged()
    }
}

/// Trims items, drops empty ones, and removes duplicates keeping the first occurrence.
pub(crate) fn normalize<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_default_from_option() {
        assert_eq!(ListDefault::from(Some("it")).as_slice(), ["it"]);
        assert!(ListDefault::from(None::<&str>).as_slice().is_empty());
    }

    #[test]
    fn test_list_default_from_array_and_slice() {
        assert_eq!(ListDefault::from(["a", "b"]).as_slice(), ["a", "b"]);
        let items: &[f64] = &[1.5, 2.0];
        assert_eq!(ListDefault::from(items).as_slice(), ["1.5", "2"]);
    }

    #[test]
    fn test_list_default_from_unit() {
        assert_eq!(ListDefault::from(()), ListDefault::none());
    }

    #[test]
    fn test_list_options_default_merges() {
        assert!(ListOptions::default().merge);
        assert!(!ListOptions::replace().merge);
        assert!(ListOptions::replace().merge(true).merge);
    }

    #[test]
    fn test_normalize() {
        let items = vec![" it", "en", "", "  ", "it", "sw "]
            .into_iter()
            .map(String::from);
        assert_eq!(normalize(items), vec!["it", "en", "sw"]);
    }
}
