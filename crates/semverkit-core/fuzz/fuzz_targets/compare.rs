//! Fuzzing target for precedence
//!
//! Splits the input at the first newline into two candidate versions and
//! checks that comparison is antisymmetric and agrees with equality.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverkit_core::{compare, equals, parse};
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let Some((left, right)) = input.split_once('\n') else {
        return;
    };

    if let (Ok(a), Ok(b)) = (parse(left), parse(right)) {
        assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        assert_eq!(equals(&a, &b), compare(&a, &b) == Ordering::Equal);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }
});
