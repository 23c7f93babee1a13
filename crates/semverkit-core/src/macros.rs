//! Convenience for hard-coded version literals
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

/// Parse a version literal, panicking if it is invalid.
///
/// Only for constants and tests where a bad literal is a programming error.
/// Anything that handles outside input must use [`crate::parse`] or
/// [`crate::Version::parse`] and handle the error.
///
/// ```
/// use semverkit_core::version;
///
/// let minimum = version!("1.4.0");
/// assert!(version!("1.4.0-rc.1") < minimum);
/// ```
///
/// ```should_panic
/// semverkit_core::version!("1.4");
/// ```
#[macro_export]
macro_rules! version {
    ($literal:literal) => {
        match $crate::parse($literal) {
            Ok(version) => version,
            Err(error) => panic!(
                "`{}` is not a valid semantic version: {}",
                $literal,
                error.detailed_message()
            ),
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_valid_literal() {
        let v = version!("10.20.30-rc.1+b");
        assert_eq!(v.to_string(), "10.20.30-rc.1+b");
    }

    #[test]
    #[should_panic(expected = "Patch version MUST NOT contain leading zeroes")]
    fn test_invalid_literal_panics() {
        let _ = version!("1.1.01");
    }
}
