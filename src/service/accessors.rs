// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors.
//!
//! Scalar accessors (`get_string`, `get_number`, `get_boolean`) treat a variable
//! set to the empty string the same as an unset one and return the default.
//! The raw accessor `get` does not: it returns the empty string.
//!
//! List accessors split on commas, trim items, drop empty items and remove
//! duplicates, keeping the first occurrence.

use crate::domain::env_value::coerce_number;
use crate::domain::list::normalize;
use crate::domain::{EnvKey, EnvValue, ListDefault, ListOptions, Object, Result};
use crate::service::Env;

impl Env {
    fn lookup(&self, key: &str) -> Option<EnvValue> {
        self.ensure_loaded();
        self.store.get_str(key)
    }

    fn lookup_truthy(&self, key: &str) -> Option<EnvValue> {
        self.lookup(key).filter(EnvValue::is_truthy)
    }

    /// Returns the raw value of `key`, including an empty value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lookup(key).map(EnvValue::into_string)
    }

    /// Returns the raw value of `key`, or `default` if it is unset.
    pub fn get_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Numbers are stored in their shortest form, booleans as `true`/`false` and
    /// sequences comma-joined. Returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the key or value, e.g. a key
    /// containing `=`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryStore;
    /// use hexenv::service::Env;
    ///
    /// let env = Env::builder().with_store(Box::new(MemoryStore::new())).build();
    ///
    /// let stored = env.set("AGES", vec![14, 15]).unwrap();
    /// assert_eq!(stored.as_str(), "14,15");
    /// assert_eq!(env.get_numbers("AGES"), vec![14.0, 15.0]);
    /// ```
    pub fn set(&self, key: &str, value: impl Into<EnvValue>) -> Result<EnvValue> {
        self.ensure_loaded();
        let value = value.into();
        self.store.set(&EnvKey::from(key), value.clone())?;
        Ok(value)
    }

    /// Removes each of `keys`. Keys that are not set are ignored.
    pub fn clear<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.ensure_loaded();
        for key in keys {
            self.store.remove(&EnvKey::from(key.as_ref()));
        }
    }

    /// Returns the value of `key` as a string, if set and non-empty.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.lookup_truthy(key).map(EnvValue::into_string)
    }

    /// Returns the value of `key` as a string, or `default` if unset or empty.
    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_string(key).unwrap_or_else(|| default.into())
    }

    /// Returns the value of `key` as a number, if set and non-empty.
    ///
    /// A value that is not numeric yields `NaN` rather than `None`, so a typo in
    /// a variable is distinguishable from an unset variable.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.lookup_truthy(key).map(|v| v.as_number())
    }

    /// Returns the value of `key` as a number, or `default` if unset or empty.
    pub fn get_number_or(&self, key: &str, default: f64) -> f64 {
        self.get_number(key).unwrap_or(default)
    }

    /// Returns the value of `key` as a boolean, if set and non-empty.
    ///
    /// `"false"` is `false`; any other non-empty value is `true`.
    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.lookup_truthy(key).map(|v| v.as_boolean())
    }

    /// Returns the value of `key` as a boolean, or `default` if unset or empty.
    pub fn get_boolean_or(&self, key: &str, default: bool) -> bool {
        self.get_boolean(key).unwrap_or(default)
    }

    fn list_items(&self, key: &str, default: ListDefault, options: ListOptions) -> Vec<String> {
        let defaults = default.into_vec();
        let items = match self.lookup(key) {
            Some(raw) if !options.merge => raw.split_list(),
            Some(raw) => defaults.into_iter().chain(raw.split_list()).collect(),
            None => defaults,
        };
        normalize(items)
    }

    /// Returns the comma-separated items of `key`.
    pub fn get_array(&self, key: &str) -> Vec<String> {
        self.get_array_with(key, ListDefault::none(), ListOptions::default())
    }

    /// Returns `default` followed by the comma-separated items of `key`.
    pub fn get_array_or(&self, key: &str, default: impl Into<ListDefault>) -> Vec<String> {
        self.get_array_with(key, default, ListOptions::default())
    }

    /// Returns the items of `key` combined with `default` as `options` dictate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryStore;
    /// use hexenv::domain::ListOptions;
    /// use hexenv::service::Env;
    ///
    /// let store = MemoryStore::from_pairs([("LOCALES", "en, sw,fr,en")]);
    /// let env = Env::builder().with_store(Box::new(store)).build();
    ///
    /// assert_eq!(env.get_array("LOCALES"), ["en", "sw", "fr"]);
    /// assert_eq!(
    ///     env.get_array_with("LOCALES", "it", ListOptions::merged()),
    ///     ["it", "en", "sw", "fr"]
    /// );
    /// assert_eq!(
    ///     env.get_array_with("LOCALES", "it", ListOptions::replace()),
    ///     ["en", "sw", "fr"]
    /// );
    /// ```
    pub fn get_array_with(
        &self,
        key: &str,
        default: impl Into<ListDefault>,
        options: ListOptions,
    ) -> Vec<String> {
        self.list_items(key, default.into(), options)
    }

    /// Returns the items of `key` as strings.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        self.get_strings_with(key, ListDefault::none(), ListOptions::default())
    }

    /// Returns `default` followed by the items of `key`, as strings.
    ///
    /// Non-string defaults such as `vec![14, 15]` are stringified.
    pub fn get_strings_or(&self, key: &str, default: impl Into<ListDefault>) -> Vec<String> {
        self.get_strings_with(key, default, ListOptions::default())
    }

    /// Returns the items of `key` and `default` as strings, as `options` dictate.
    pub fn get_strings_with(
        &self,
        key: &str,
        default: impl Into<ListDefault>,
        options: ListOptions,
    ) -> Vec<String> {
        self.get_array_with(key, default, options)
    }

    /// Returns the items of `key` as numbers; non-numeric items are `NaN`.
    pub fn get_numbers(&self, key: &str) -> Vec<f64> {
        self.get_numbers_with(key, ListDefault::none(), ListOptions::default())
    }

    /// Returns `default` followed by the items of `key`, as numbers.
    pub fn get_numbers_or(&self, key: &str, default: impl Into<ListDefault>) -> Vec<f64> {
        self.get_numbers_with(key, default, ListOptions::default())
    }

    /// Returns the items of `key` and `default` as numbers, as `options` dictate.
    pub fn get_numbers_with(
        &self,
        key: &str,
        default: impl Into<ListDefault>,
        options: ListOptions,
    ) -> Vec<f64> {
        self.get_array_with(key, default, options)
            .iter()
            .map(|item| coerce_number(item))
            .collect()
    }

    /// Returns the distinct items of `key`.
    pub fn get_string_set(&self, key: &str) -> Vec<String> {
        self.get_string_set_with(key, ListDefault::none(), ListOptions::default())
    }

    /// Returns the distinct items of `default` and `key`.
    pub fn get_string_set_or(&self, key: &str, default: impl Into<ListDefault>) -> Vec<String> {
        self.get_string_set_with(key, default, ListOptions::default())
    }

    /// Returns the distinct items of `key` and `default`, as `options` dictate.
    ///
    /// Uniqueness is enforced after merging, whatever the merge option.
    pub fn get_string_set_with(
        &self,
        key: &str,
        default: impl Into<ListDefault>,
        options: ListOptions,
    ) -> Vec<String> {
        normalize(self.list_items(key, default.into(), options))
    }

    /// Returns the value of `key` decoded as a JSON object.
    ///
    /// Unset, empty, malformed and non-object values all yield an empty object.
    pub fn get_object(&self, key: &str) -> Object {
        self.get_object_or(key, Object::new())
    }

    /// Returns the value of `key` decoded as a JSON object, or `default`.
    pub fn get_object_or(&self, key: &str, default: Object) -> Object {
        match self.lookup_truthy(key) {
            Some(raw) => raw.as_object().unwrap_or_else(|| {
                tracing::debug!("Value of '{}' is not a JSON object; using default", key);
                default
            }),
            None => default,
        }
    }
}
