// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide environment access.
//!
//! The free functions in this module operate on a single lazily constructed
//! [`Env`] over the process environment. Each delegates to the method of the
//! same name; see [`Env`] for details.

use crate::domain::{EnvValue, ListDefault, ListOptions, LoadResult, Object, Result};
use crate::service::{ApiVersionOptions, Env};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Env> = Lazy::new(Env::new);

/// Returns the process-wide `Env`.
pub fn global() -> &'static Env {
    &GLOBAL
}

/// Loads the `.env` file into the process environment, once. See [`Env::load`].
pub fn load() -> LoadResult {
    GLOBAL.load()
}

/// See [`Env::get`].
pub fn get(key: &str) -> Option<String> {
    GLOBAL.get(key)
}

/// See [`Env::get_or`].
pub fn get_or(key: &str, default: impl Into<String>) -> String {
    GLOBAL.get_or(key, default)
}

/// See [`Env::set`].
pub fn set(key: &str, value: impl Into<EnvValue>) -> Result<EnvValue> {
    GLOBAL.set(key, value)
}

/// See [`Env::clear`].
pub fn clear<I, K>(keys: I)
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    GLOBAL.clear(keys)
}

/// See [`Env::get_string`].
pub fn get_string(key: &str) -> Option<String> {
    GLOBAL.get_string(key)
}

/// See [`Env::get_string_or`].
pub fn get_string_or(key: &str, default: impl Into<String>) -> String {
    GLOBAL.get_string_or(key, default)
}

/// See [`Env::get_number`].
pub fn get_number(key: &str) -> Option<f64> {
    GLOBAL.get_number(key)
}

/// See [`Env::get_number_or`].
pub fn get_number_or(key: &str, default: f64) -> f64 {
    GLOBAL.get_number_or(key, default)
}

/// See [`Env::get_boolean`].
pub fn get_boolean(key: &str) -> Option<bool> {
    GLOBAL.get_boolean(key)
}

/// See [`Env::get_boolean_or`].
pub fn get_boolean_or(key: &str, default: bool) -> bool {
    GLOBAL.get_boolean_or(key, default)
}

/// See [`Env::get_array`].
pub fn get_array(key: &str) -> Vec<String> {
    GLOBAL.get_array(key)
}

/// See [`Env::get_array_or`].
pub fn get_array_or(key: &str, default: impl Into<ListDefault>) -> Vec<String> {
    GLOBAL.get_array_or(key, default)
}

/// See [`Env::get_array_with`].
pub fn get_array_with(
    key: &str,
    default: impl Into<ListDefault>,
    options: ListOptions,
) -> Vec<String> {
    GLOBAL.get_array_with(key, default, options)
}

/// See [`Env::get_strings`].
pub fn get_strings(key: &str) -> Vec<String> {
    GLOBAL.get_strings(key)
}

/// See [`Env::get_strings_or`].
pub fn get_strings_or(key: &str, default: impl Into<ListDefault>) -> Vec<String> {
    GLOBAL.get_strings_or(key, default)
}

/// See [`Env::get_strings_with`].
pub fn get_strings_with(
    key: &str,
    default: impl Into<ListDefault>,
    options: ListOptions,
) -> Vec<String> {
    GLOBAL.get_strings_with(key, default, options)
}

/// See [`Env::get_numbers`].
pub fn get_numbers(key: &str) -> Vec<f64> {
    GLOBAL.get_numbers(key)
}

/// See [`Env::get_numbers_or`].
pub fn get_numbers_or(key: &str, default: impl Into<ListDefault>) -> Vec<f64> {
    GLOBAL.get_numbers_or(key, default)
}

/// See [`Env::get_numbers_with`].
pub fn get_numbers_with(
    key: &str,
    default: impl Into<ListDefault>,
    options: ListOptions,
) -> Vec<f64> {
    GLOBAL.get_numbers_with(key, default, options)
}

/// See [`Env::get_string_set`].
pub fn get_string_set(key: &str) -> Vec<String> {
    GLOBAL.get_string_set(key)
}

/// See [`Env::get_string_set_or`].
pub fn get_string_set_or(key: &str, default: impl Into<ListDefault>) -> Vec<String> {
    GLOBAL.get_string_set_or(key, default)
}

/// See [`Env::get_string_set_with`].
pub fn get_string_set_with(
    key: &str,
    default: impl Into<ListDefault>,
    options: ListOptions,
) -> Vec<String> {
    GLOBAL.get_string_set_with(key, default, options)
}

/// See [`Env::get_object`].
pub fn get_object(key: &str) -> Object {
    GLOBAL.get_object(key)
}

/// See [`Env::get_object_or`].
pub fn get_object_or(key: &str, default: Object) -> Object {
    GLOBAL.get_object_or(key, default)
}

/// See [`Env::is`].
pub fn is(name: &str) -> bool {
    GLOBAL.is(name)
}

/// See [`Env::is_test`].
pub fn is_test() -> bool {
    GLOBAL.is_test()
}

/// See [`Env::is_development`].
pub fn is_development() -> bool {
    GLOBAL.is_development()
}

/// See [`Env::is_production`].
pub fn is_production() -> bool {
    GLOBAL.is_production()
}

/// See [`Env::is_local`].
pub fn is_local() -> bool {
    GLOBAL.is_local()
}

/// See [`Env::is_heroku`].
pub fn is_heroku() -> bool {
    GLOBAL.is_heroku()
}

/// See [`Env::api_version`].
pub fn api_version(options: &ApiVersionOptions) -> String {
    GLOBAL.api_version(options)
}

/// See [`Env::get_locale`].
pub fn get_locale(default: &str) -> String {
    GLOBAL.get_locale(default)
}

/// See [`Env::get_country_code`].
pub fn get_country_code(default: &str) -> String {
    GLOBAL.get_country_code(default)
}
