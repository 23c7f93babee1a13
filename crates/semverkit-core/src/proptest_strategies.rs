//! Property-based testing strategies for generating versions
//!
//! Strategies produce canonical version strings, so anything they generate
//! must parse.

#![cfg(test)]

use crate::{compare, equals, parse, Version};
use proptest::option;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Canonical numeral, sometimes wider than any machine integer
pub fn numeral_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (0u64..20).prop_map(|n| n.to_string()),
        2 => any::<u64>().prop_map(|n| n.to_string()),
        1 => "[1-9][0-9]{19,30}",
    ]
}

/// One pre-release identifier, numeric or alphanumeric
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        numeral_strategy(),
        "[0-9]{0,3}[a-zA-Z-][0-9a-zA-Z-]{0,8}",
    ]
}

/// Dot-joined identifiers for a pre-release
pub fn pre_release_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(identifier_strategy(), 1..5).prop_map(|ids| ids.join("."))
}

/// Dot-joined build metadata segments; leading zeros allowed
pub fn build_metadata_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[0-9a-zA-Z-]{1,8}", 1..4).prop_map(|ids| ids.join("."))
}

/// A canonical version string
pub fn version_string_strategy() -> impl Strategy<Value = String> {
    (
        numeral_strategy(),
        numeral_strategy(),
        numeral_strategy(),
        option::of(pre_release_strategy()),
        option::of(build_metadata_strategy()),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut s = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(&pre);
            }
            if let Some(build) = build {
                s.push('+');
                s.push_str(&build);
            }
            s
        })
}

/// Versions drawn from a small pool so that ties are common
pub fn clustered_version_strategy() -> impl Strategy<Value = Version> {
    (
        0u64..3,
        0u64..3,
        0u64..3,
        option::of(proptest::collection::vec(
            prop_oneof![Just("alpha"), Just("beta"), Just("1"), Just("2"), Just("11")],
            1..3,
        )),
        option::of(prop_oneof![Just("b1"), Just("b2")]),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut s = format!("{}.{}.{}", major, minor, patch);
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(&pre.join("."));
            }
            if let Some(build) = build {
                s.push('+');
                s.push_str(build);
            }
            parse(&s).expect("strategy produces valid versions")
        })
}

proptest! {
    #[test]
    fn prop_canonical_strings_parse_and_display_unchanged(s in version_string_strategy()) {
        let version = parse(&s).unwrap();
        prop_assert_eq!(version.to_string(), s);
    }

    #[test]
    fn prop_comparison_is_antisymmetric(
        a in clustered_version_strategy(),
        b in clustered_version_strategy(),
    ) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        prop_assert_eq!(equals(&a, &b), compare(&a, &b) == Ordering::Equal);
    }
}
