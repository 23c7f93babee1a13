//! Pre-release identifiers and build metadata
//!
//! Both suffixes are dot-separated lists of ASCII alphanumerics and hyphens.
//! Pre-release identifiers are classified as numeric or alphanumeric and take
//! part in precedence; build metadata segments are kept verbatim and never do.
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use crate::error::{ParseError, Result};
use crate::numeric::{has_leading_zero, is_digits, Numeric};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One dot-separated component of a pre-release
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Digits only, e.g. `1` in `alpha.1`
    Numeric(Numeric),
    /// Anything else, e.g. `alpha`, `0A`, `x-y`
    Alphanumeric(String),
}

impl Identifier {
    /// Whether the identifier is made only of digits
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// The identifier text as written
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric(n) => n.as_str(),
            Self::Alphanumeric(s) => s,
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Alphanumeric(_)) => Ordering::Less,
            (Self::Alphanumeric(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alphanumeric(a), Self::Alphanumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `-`-prefixed suffix of a version: at least one identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Validate and classify the text after the `-` marker.
    pub fn parse(text: &str) -> Result<Self> {
        let segments: Vec<&str> = text.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ParseError::PreReleaseIdentifierMustNotBeEmpty);
        }

        let mut identifiers = Vec::with_capacity(segments.len());
        for segment in segments {
            if !is_identifier_text(segment) {
                return Err(ParseError::PreReleaseContainsInvalidCharacter);
            }
            if is_digits(segment) {
                if has_leading_zero(segment) {
                    return Err(ParseError::PreReleaseNumericIdentifierMustNotContainLeadingZeros);
                }
                identifiers.push(Identifier::Numeric(Numeric::from_canonical(segment)));
            } else {
                identifiers.push(Identifier::Alphanumeric(segment.to_string()));
            }
        }

        Ok(Self { identifiers })
    }

    /// Identifiers in the order they appeared
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Number of identifiers, never zero
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Always false: a pre-release has at least one identifier.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        for (left, right) in self.identifiers.iter().zip(&other.identifiers) {
            match left.cmp(right) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.identifiers.len().cmp(&other.identifiers.len())
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.identifiers.iter().map(Identifier::as_str))
    }
}

impl FromStr for PreRelease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PreRelease {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PreRelease> for String {
    fn from(value: PreRelease) -> Self {
        value.to_string()
    }
}

/// The `+`-prefixed suffix of a version, kept only for display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildMetadata {
    segments: Vec<String>,
}

impl BuildMetadata {
    /// Validate the text after the `+` marker. Leading zeros are allowed here.
    pub fn parse(text: &str) -> Result<Self> {
        let segments: Vec<&str> = text.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ParseError::BuildMetadataIdentifierMustNotBeEmpty);
        }
        if !segments.iter().all(|s| is_identifier_text(s)) {
            return Err(ParseError::BuildMetadataContainsInvalidCharacter);
        }

        Ok(Self {
            segments: segments.into_iter().map(str::to_string).collect(),
        })
    }

    /// Raw segments in the order they appeared
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.segments.iter().map(String::as_str))
    }
}

impl FromStr for BuildMetadata {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BuildMetadata {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BuildMetadata> for String {
    fn from(value: BuildMetadata) -> Self {
        value.to_string()
    }
}

/// `[0-9A-Za-z-]+`
fn is_identifier_text(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn write_dotted<'a>(f: &mut fmt::Formatter<'_>, parts: impl Iterator<Item = &'a str>) -> fmt::Result {
    for (i, part) in parts.enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(part)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(s: &str) -> PreRelease {
        PreRelease::parse(s).unwrap()
    }

    #[test]
    fn test_classification() {
        let p = pre("alpha.1.0A.x-y.0");
        let kinds: Vec<bool> = p.identifiers().iter().map(Identifier::is_numeric).collect();
        assert_eq!(kinds, vec![false, true, false, false, true]);
        assert_eq!(p.to_string(), "alpha.1.0A.x-y.0");
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_pre_release_errors() {
        assert_eq!(
            PreRelease::parse(""),
            Err(ParseError::PreReleaseIdentifierMustNotBeEmpty)
        );
        assert_eq!(
            PreRelease::parse("alpha..1"),
            Err(ParseError::PreReleaseIdentifierMustNotBeEmpty)
        );
        assert_eq!(
            PreRelease::parse("alpha_beta"),
            Err(ParseError::PreReleaseContainsInvalidCharacter)
        );
        assert_eq!(
            PreRelease::parse("0123"),
            Err(ParseError::PreReleaseNumericIdentifierMustNotContainLeadingZeros)
        );
        assert_eq!(
            PreRelease::parse("09.a_b"),
            Err(ParseError::PreReleaseNumericIdentifierMustNotContainLeadingZeros)
        );
        // empties are reported before anything else in the list
        assert_eq!(
            PreRelease::parse("09..1"),
            Err(ParseError::PreReleaseIdentifierMustNotBeEmpty)
        );
        assert_eq!(
            PreRelease::parse("béta"),
            Err(ParseError::PreReleaseContainsInvalidCharacter)
        );
    }

    #[test]
    fn test_identifier_ordering() {
        let one = Identifier::Numeric(Numeric::from(1));
        let big = Identifier::Numeric(Numeric::parse("1000000000000000000000").unwrap());
        let alpha = Identifier::Alphanumeric("alpha".to_string());
        let upper = Identifier::Alphanumeric("Alpha".to_string());

        assert!(one < big);
        assert!(big < alpha);
        assert!(upper < alpha);
    }

    #[test]
    fn test_pre_release_ordering() {
        assert!(pre("alpha") < pre("alpha.1"));
        assert!(pre("alpha.1") < pre("alpha.beta"));
        assert!(pre("beta.2") < pre("beta.11"));
        assert!(pre("99") < pre("100"));
        assert!(pre("1000000") < pre("alpha.1"));
        assert_eq!(pre("rc.1").cmp(&pre("rc.1")), Ordering::Equal);
    }

    #[test]
    fn test_build_metadata() {
        let build = BuildMetadata::parse("0.build.1-rc.10000aaa-kk-0.1").unwrap();
        assert_eq!(build.segments()[0], "0");
        assert_eq!(build.to_string(), "0.build.1-rc.10000aaa-kk-0.1");
        assert_eq!(
            BuildMetadata::parse(".123"),
            Err(ParseError::BuildMetadataIdentifierMustNotBeEmpty)
        );
        assert_eq!(
            BuildMetadata::parse("meta+meta"),
            Err(ParseError::BuildMetadataContainsInvalidCharacter)
        );
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&pre("beta.11")).unwrap();
        assert_eq!(json, "\"beta.11\"");
        assert!(serde_json::from_str::<PreRelease>("\"beta..11\"").is_err());
    }
}
