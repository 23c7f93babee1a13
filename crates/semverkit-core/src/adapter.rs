//! Semver behaviour for host types
//!
//! A type that already carries a version triple (an OS version, a build
//! descriptor, a protocol header) implements [`SemanticVersion`] by exposing
//! its fields and constructing itself from parts. Parsing, ordering,
//! formatting and increment then come from the core through static dispatch.
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use crate::compare::compare;
use crate::error::{Component, ParseError};
use crate::identifier::{BuildMetadata, PreRelease};
use crate::numeric::Numeric;
use crate::parser::parse;
use crate::version::{Element, Version};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Capability to expose and rebuild semantic version fields
pub trait SemanticVersion: Sized {
    fn major(&self) -> Numeric;
    fn minor(&self) -> Numeric;
    fn patch(&self) -> Numeric;

    fn pre_release(&self) -> Option<PreRelease> {
        None
    }

    fn build_metadata(&self) -> Option<BuildMetadata> {
        None
    }

    /// Build the host type from validated fields. Types that cannot store a
    /// field may drop it; a number the type cannot hold is an error.
    fn from_parts(
        major: Numeric,
        minor: Numeric,
        patch: Numeric,
        pre_release: Option<PreRelease>,
        build_metadata: Option<BuildMetadata>,
    ) -> Result<Self, ParseError>;

    /// The core value with the same fields
    fn to_version(&self) -> Version {
        Version::from_parts(
            self.major(),
            self.minor(),
            self.patch(),
            self.pre_release(),
            self.build_metadata(),
        )
    }

    fn from_version(version: Version) -> Result<Self, ParseError> {
        Self::from_parts(
            version.major().clone(),
            version.minor().clone(),
            version.patch().clone(),
            version.pre_release().cloned(),
            version.build_metadata().cloned(),
        )
    }

    /// Parse text straight into the host type
    fn parse_as(input: &str) -> Result<Self, ParseError> {
        parse(input).and_then(Self::from_version)
    }

    /// Precedence against any other host type
    fn precedence<O: SemanticVersion>(&self, other: &O) -> Ordering {
        compare(&self.to_version(), &other.to_version())
    }

    fn version_string(&self) -> String {
        self.to_version().version_string()
    }

    fn short_version_string(&self) -> String {
        self.to_version().short_version_string()
    }

    /// The next release; fails when the host type cannot hold it
    fn increment(&self, element: Element) -> Result<Self, ParseError> {
        Self::from_version(self.to_version().increment(element))
    }
}

impl SemanticVersion for Version {
    fn major(&self) -> Numeric {
        Version::major(self).clone()
    }

    fn minor(&self) -> Numeric {
        Version::minor(self).clone()
    }

    fn patch(&self) -> Numeric {
        Version::patch(self).clone()
    }

    fn pre_release(&self) -> Option<PreRelease> {
        Version::pre_release(self).cloned()
    }

    fn build_metadata(&self) -> Option<BuildMetadata> {
        Version::build_metadata(self).cloned()
    }

    fn from_parts(
        major: Numeric,
        minor: Numeric,
        patch: Numeric,
        pre_release: Option<PreRelease>,
        build_metadata: Option<BuildMetadata>,
    ) -> Result<Self, ParseError> {
        Ok(Version::from_parts(major, minor, patch, pre_release, build_metadata))
    }

    fn to_version(&self) -> Version {
        self.clone()
    }

    fn from_version(version: Version) -> Result<Self, ParseError> {
        Ok(version)
    }
}

/// An operating system version triple.
///
/// Carries no pre-release or build metadata; they are dropped on
/// construction. A component that does not fit in `u64` is rejected with
/// the matching `*MustBeNonNegativeInteger` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OsVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl OsVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }
}

impl SemanticVersion for OsVersion {
    fn major(&self) -> Numeric {
        self.major.into()
    }

    fn minor(&self) -> Numeric {
        self.minor.into()
    }

    fn patch(&self) -> Numeric {
        self.patch.into()
    }

    fn from_parts(
        major: Numeric,
        minor: Numeric,
        patch: Numeric,
        _pre_release: Option<PreRelease>,
        _build_metadata: Option<BuildMetadata>,
    ) -> Result<Self, ParseError> {
        let fit = |n: Numeric, component: Component| {
            n.to_u64()
                .ok_or_else(|| ParseError::non_negative_integer(component))
        };
        Ok(Self::new(
            fit(major, Component::Major)?,
            fit(minor, Component::Minor)?,
            fit(patch, Component::Patch)?,
        ))
    }
}
