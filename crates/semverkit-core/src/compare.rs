//! Version precedence
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use crate::version::Version;
use std::cmp::Ordering;

/// Total order over versions by semver precedence.
///
/// Major, minor and patch are compared numerically in that order. With equal
/// core numbers a release outranks any pre-release, and two pre-releases are
/// compared identifier by identifier. Build metadata is never consulted.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(b.major())
        .then_with(|| a.minor().cmp(b.minor()))
        .then_with(|| a.patch().cmp(b.patch()))
        .then_with(|| match (a.pre_release(), b.pre_release()) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(left), Some(right)) => left.cmp(right),
        })
}

/// Same precedence; build metadata may differ.
pub fn equals(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_core_numbers() {
        assert_eq!(compare(&v("1.0.0"), &v("0.999999999.999999999")), Ordering::Greater);
        assert_eq!(compare(&v("1.2.0"), &v("1.1.999999999")), Ordering::Greater);
        assert_eq!(compare(&v("1.2.2"), &v("1.2.1")), Ordering::Greater);
        assert_eq!(
            compare(&v("999999999999999999.0.0"), &v("1000000000000000000.0.0")),
            Ordering::Less
        );
    }

    #[test]
    fn test_release_outranks_pre_release() {
        assert_eq!(compare(&v("1.0.0"), &v("1.0.0-alpha")), Ordering::Greater);
        assert_eq!(compare(&v("1.0.0-zzz"), &v("1.0.0")), Ordering::Less);
        // but only when the core numbers tie
        assert_eq!(compare(&v("1.0.1-alpha"), &v("1.0.0")), Ordering::Greater);
    }

    #[test]
    fn test_pre_release_identifiers() {
        assert_eq!(compare(&v("1.0.0-100"), &v("1.0.0-99")), Ordering::Greater);
        assert_eq!(compare(&v("1.0.0-alpha.1"), &v("1.0.0-1000000")), Ordering::Greater);
        assert_eq!(compare(&v("1.0.0-alpha.1"), &v("1.0.0-alpha")), Ordering::Greater);
        assert_eq!(compare(&v("1.0.0-alpha.beta"), &v("1.0.0-alpha.1")), Ordering::Greater);
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert!(equals(&v("1.0.0+build.1"), &v("1.0.0")));
        assert!(equals(&v("1.0.0-alpha+build.1"), &v("1.0.0-alpha")));
        assert!(equals(&v("1.0.0+a"), &v("1.0.0+b")));
        assert!(!equals(&v("1.0.0-a+x"), &v("1.0.0-b+x")));
    }
}
