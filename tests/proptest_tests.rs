// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that list normalization, number coercion and version
//! coercion hold for arbitrary inputs.

mod common;

use common::memory_env;
use hexenv::domain::{EnvValue, ListOptions, Version};
use proptest::prelude::*;
use std::collections::HashSet;

fn list_item() -> impl Strategy<Value = String> {
    "[ a-z0-9]{0,6}"
}

// List accessors never return empty, untrimmed or duplicate items
proptest! {
    #[test]
    fn test_get_array_items_are_clean(items in prop::collection::vec(list_item(), 0..12)) {
        let raw = items.join(",");
        let env = memory_env(&[("LIST", raw.as_str())]);

        let result = env.get_array("LIST");
        let mut seen = HashSet::new();
        for item in &result {
            prop_assert!(!item.is_empty());
            prop_assert_eq!(item.trim(), item.as_str());
            prop_assert!(seen.insert(item.clone()));
        }
    }
}

// Every non-empty item in the variable shows up in the result, first occurrence first
proptest! {
    #[test]
    fn test_get_array_keeps_first_occurrence_order(items in prop::collection::vec(list_item(), 0..12)) {
        let raw = items.join(",");
        let env = memory_env(&[("LIST", raw.as_str())]);

        let mut expected: Vec<String> = Vec::new();
        for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if !expected.iter().any(|e| e == item) {
                expected.push(item.to_string());
            }
        }
        prop_assert_eq!(env.get_array("LIST"), expected);
    }
}

// Replacing ignores the default whenever the key is present
proptest! {
    #[test]
    fn test_replace_ignores_default(
        items in prop::collection::vec(list_item(), 1..8),
        default in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        let raw = items.join(",");
        let env = memory_env(&[("LIST", raw.as_str())]);

        prop_assert_eq!(
            env.get_array_with("LIST", default, ListOptions::replace()),
            env.get_array("LIST")
        );
    }
}

// Merging puts the default first and adds every environment item
proptest! {
    #[test]
    fn test_merge_prefixes_default(
        items in prop::collection::vec("[a-z]{1,4}", 0..8),
        default in prop::collection::vec("[A-Z]{1,4}", 1..4),
    ) {
        let raw = items.join(",");
        let env = memory_env(&[("LIST", raw.as_str())]);

        let merged = env.get_array_or("LIST", default.clone());
        let from_env = env.get_array("LIST");
        let distinct_default: Vec<String> = {
            let mut seen = HashSet::new();
            default.into_iter().filter(|d| seen.insert(d.clone())).collect()
        };

        prop_assert_eq!(&merged[..distinct_default.len()], &distinct_default[..]);
        prop_assert_eq!(&merged[distinct_default.len()..], &from_env[..]);
    }
}

// Integers survive storage and numeric coercion
proptest! {
    #[test]
    fn test_integer_numbers_coerce_exactly(n in -1_000_000_000i64..1_000_000_000i64) {
        let env = memory_env(&[]);
        env.set("N", n).unwrap();
        prop_assert_eq!(env.get_number("N"), Some(n as f64));
    }
}

// Text without any digit, sign, dot or letter is never a finite number
proptest! {
    #[test]
    fn test_symbol_text_is_nan(s in "[!@#%&*()]{1,8}") {
        prop_assert!(EnvValue::from(s).as_number().is_nan());
    }
}

// Formatted versions coerce back to the same components
proptest! {
    #[test]
    fn test_version_coerce_formatted(
        major in 0u64..100_000,
        minor in 0u64..100_000,
        patch in 0u64..100_000,
    ) {
        let text = format!("v{}.{}.{}", major, minor, patch);
        prop_assert_eq!(Version::coerce(&text), Some(Version::new(major, minor, patch)));
    }
}

// Coercion never panics on arbitrary text
proptest! {
    #[test]
    fn test_version_coerce_any_string(s in "\\PC*") {
        let _ = Version::coerce(&s);
    }
}
