//! The semantic version value
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use crate::compare::compare;
use crate::error::ParseError;
use crate::identifier::{BuildMetadata, PreRelease};
use crate::numeric::Numeric;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable, validated semantic version.
///
/// Equality, ordering and hashing follow precedence: build metadata is carried
/// for display but ignored by all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: Numeric,
    minor: Numeric,
    patch: Numeric,
    pre_release: Option<PreRelease>,
    build_metadata: Option<BuildMetadata>,
}

/// A core number that can be incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// A release version from machine integers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(major.into(), minor.into(), patch.into(), None, None)
    }

    /// Assemble a version from already validated parts
    pub fn from_parts(
        major: Numeric,
        minor: Numeric,
        patch: Numeric,
        pre_release: Option<PreRelease>,
        build_metadata: Option<BuildMetadata>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Fallible constructor from text; see [`crate::parse`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// The major version number
    pub fn major(&self) -> &Numeric {
        &self.major
    }

    /// The minor version number
    pub fn minor(&self) -> &Numeric {
        &self.minor
    }

    /// The patch version number
    pub fn patch(&self) -> &Numeric {
        &self.patch
    }

    /// The pre-release suffix, if any
    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre_release.as_ref()
    }

    /// The build metadata suffix, if any
    pub fn build_metadata(&self) -> Option<&BuildMetadata> {
        self.build_metadata.as_ref()
    }

    /// Whether a pre-release suffix is present
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// A copy of this version with the given pre-release
    pub fn with_pre_release(&self, pre_release: Option<PreRelease>) -> Self {
        Self {
            pre_release,
            ..self.clone()
        }
    }

    /// A copy of this version with the given build metadata
    pub fn with_build_metadata(&self, build_metadata: Option<BuildMetadata>) -> Self {
        Self {
            build_metadata,
            ..self.clone()
        }
    }

    /// The next version for `element`. Lower elements reset to zero and both
    /// suffixes are dropped.
    pub fn increment(&self, element: Element) -> Self {
        let (major, minor, patch) = match element {
            Element::Major => (self.major.increment(), Numeric::zero(), Numeric::zero()),
            Element::Minor => (self.major.clone(), self.minor.increment(), Numeric::zero()),
            Element::Patch => (self.major.clone(), self.minor.clone(), self.patch.increment()),
        };
        Self::from_parts(major, minor, patch, None, None)
    }

    /// Canonical `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` text
    pub fn version_string(&self) -> String {
        self.to_string()
    }

    /// Drops trailing zero components of a plain release: `1.2.0` is `1.2`
    /// and `1.0.0` is `1`. Versions with a suffix or a non-zero patch stay
    /// canonical.
    pub fn short_version_string(&self) -> String {
        if self.pre_release.is_some() || self.build_metadata.is_some() || !self.patch.is_zero() {
            return self.version_string();
        }
        if self.minor.is_zero() {
            self.major.to_string()
        } else {
            format!("{}.{}", self.major, self.minor)
        }
    }

    /// Canonical text behind a prefix such as `v`
    pub fn version_string_with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parser::parse(&value)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parser::parse(value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}
