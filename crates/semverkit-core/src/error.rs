//! Error types for version parsing
//!
//! Every failure names the grammar rule it violates. The set of kinds is
//! closed: a caller can match on it exhaustively and decide how to surface it.
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a string is not a valid semantic version
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseError {
    #[error("A normal version number MUST take the form X.Y.Z")]
    #[serde(rename = "version_number_must_take_form_xyz")]
    VersionNumberMustTakeFormXYZ,

    #[error("Major version MUST be a non-negative integer")]
    MajorMustBeNonNegativeInteger,

    #[error("Major version MUST NOT contain leading zeroes")]
    MajorMustNotContainLeadingZeros,

    #[error("Minor version MUST be a non-negative integer")]
    MinorMustBeNonNegativeInteger,

    #[error("Minor version MUST NOT contain leading zeroes")]
    MinorMustNotContainLeadingZeros,

    #[error("Patch version MUST be a non-negative integer")]
    PatchMustBeNonNegativeInteger,

    #[error("Patch version MUST NOT contain leading zeroes")]
    PatchMustNotContainLeadingZeros,

    #[error("Pre-release identifiers MUST NOT be empty")]
    PreReleaseIdentifierMustNotBeEmpty,

    #[error("Pre-release identifiers MUST comprise only ASCII alphanumerics and hyphens [0-9A-Za-z-]")]
    PreReleaseContainsInvalidCharacter,

    #[error("Pre-release numeric identifiers MUST NOT include leading zeroes")]
    PreReleaseNumericIdentifierMustNotContainLeadingZeros,

    #[error("Build metadata identifiers MUST NOT be empty")]
    BuildMetadataIdentifierMustNotBeEmpty,

    #[error("Build metadata identifiers MUST comprise only ASCII alphanumerics and hyphens [0-9A-Za-z-]")]
    BuildMetadataContainsInvalidCharacter,
}

/// Which part of the version string an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Core,
    Major,
    Minor,
    Patch,
    PreRelease,
    BuildMetadata,
}

impl ParseError {
    /// The numbered item of the Semantic Versioning 2.0.0 document this error enforces
    pub fn spec_item(&self) -> u8 {
        match self.component() {
            Component::Core | Component::Major | Component::Minor | Component::Patch => 2,
            Component::PreRelease => 9,
            Component::BuildMetadata => 10,
        }
    }

    /// Link to the rule on semver.org
    pub fn reference_url(&self) -> String {
        format!("https://semver.org/#spec-item-{}", self.spec_item())
    }

    /// The part of the input the error was found in
    pub fn component(&self) -> Component {
        match self {
            Self::VersionNumberMustTakeFormXYZ => Component::Core,
            Self::MajorMustBeNonNegativeInteger | Self::MajorMustNotContainLeadingZeros => {
                Component::Major
            }
            Self::MinorMustBeNonNegativeInteger | Self::MinorMustNotContainLeadingZeros => {
                Component::Minor
            }
            Self::PatchMustBeNonNegativeInteger | Self::PatchMustNotContainLeadingZeros => {
                Component::Patch
            }
            Self::PreReleaseIdentifierMustNotBeEmpty
            | Self::PreReleaseContainsInvalidCharacter
            | Self::PreReleaseNumericIdentifierMustNotContainLeadingZeros => Component::PreRelease,
            Self::BuildMetadataIdentifierMustNotBeEmpty
            | Self::BuildMetadataContainsInvalidCharacter => Component::BuildMetadata,
        }
    }

    /// Error message followed by the semver.org reference, one per line
    pub fn detailed_message(&self) -> String {
        format!("{}.\nRef: {}", self, self.reference_url())
    }

    pub(crate) fn non_negative_integer(component: Component) -> Self {
        match component {
            Component::Major => Self::MajorMustBeNonNegativeInteger,
            Component::Minor => Self::MinorMustBeNonNegativeInteger,
            _ => Self::PatchMustBeNonNegativeInteger,
        }
    }

    pub(crate) fn leading_zeros(component: Component) -> Self {
        match component {
            Component::Major => Self::MajorMustNotContainLeadingZeros,
            Component::Minor => Self::MinorMustNotContainLeadingZeros,
            _ => Self::PatchMustNotContainLeadingZeros,
        }
    }
}
