//! Unbounded non-negative integers
//!
//! Version components and numeric pre-release identifiers are not limited to
//! any machine width. They are stored as their canonical decimal digits and
//! compared by length first, then byte by byte, which is exact numeric order
//! for canonical numerals.
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A non-negative integer of arbitrary magnitude
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Numeric(String);

/// Returned when text is not a canonical decimal numeral
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a canonical non-negative integer")]
pub struct InvalidNumeric(pub String);

impl Numeric {
    /// Zero
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Parse a canonical numeral: ASCII digits only, no leading zero unless the
    /// numeral is exactly `0`.
    pub fn parse(digits: &str) -> Option<Self> {
        if is_digits(digits) && !has_leading_zero(digits) {
            Some(Self(digits.to_string()))
        } else {
            None
        }
    }

    /// Wrap digits already checked by the caller.
    pub(crate) fn from_canonical(digits: &str) -> Self {
        debug_assert!(is_digits(digits) && !has_leading_zero(digits));
        Self(digits.to_string())
    }

    /// The canonical digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is `0`
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The value as a `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The successor of this value. Never overflows: `999` becomes `1000`.
    pub fn increment(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return Self(String::from_utf8_lossy(&digits).into_owned());
            }
        }
        digits.insert(0, b'1');
        Self(String::from_utf8_lossy(&digits).into_owned())
    }
}

/// Non-empty and made only of ASCII digits.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// More than one character and starting with `0`.
pub(crate) fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0')
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<Numeric> for String {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl TryFrom<String> for Numeric {
    type Error = InvalidNumeric;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_digits(&value) && !has_leading_zero(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidNumeric(value))
        }
    }
}

impl FromStr for Numeric {
    type Err = InvalidNumeric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidNumeric(s.to_string()))
    }
}

impl PartialEq<u64> for Numeric {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Numeric {
        Numeric::parse(s).unwrap()
    }

    #[test]
    fn test_parse_canonical_only() {
        assert_eq!(n("0").as_str(), "0");
        assert_eq!(n("1200").as_str(), "1200");
        assert!(Numeric::parse("").is_none());
        assert!(Numeric::parse("007").is_none());
        assert!(Numeric::parse("00").is_none());
        assert!(Numeric::parse("+1").is_none());
        assert!(Numeric::parse("-1").is_none());
        assert!(Numeric::parse("1a").is_none());
        assert!(Numeric::parse("١").is_none());
    }

    #[test]
    fn test_ordering_is_numeric_not_lexical() {
        assert!(n("9") < n("10"));
        assert!(n("99") < n("100"));
        assert!(n("999999999999999999") < n("9999999999999999999"));
        assert!(n("99999999999999999999999") > n("18446744073709551615"));
        assert_eq!(n("42").cmp(&n("42")), Ordering::Equal);
        assert!(n("0") < n("1"));
    }

    #[test]
    fn test_increment_carries() {
        assert_eq!(n("0").increment(), n("1"));
        assert_eq!(n("41").increment(), n("42"));
        assert_eq!(n("999").increment(), n("1000"));
        assert_eq!(n("1099").increment(), n("1100"));
        assert_eq!(
            n("18446744073709551615").increment(),
            n("18446744073709551616")
        );
    }

    #[test]
    fn test_u64_conversions() {
        assert_eq!(Numeric::from(18u64), n("18"));
        assert_eq!(n("18").to_u64(), Some(18));
        assert_eq!(n("18446744073709551616").to_u64(), None);
        assert!(n("7") == 7u64);
        assert!(Numeric::zero().is_zero());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&n("12345678901234567890")).unwrap();
        assert_eq!(json, "\"12345678901234567890\"");
        let back: Numeric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n("12345678901234567890"));
        assert!(serde_json::from_str::<Numeric>("\"012\"").is_err());
    }
}
