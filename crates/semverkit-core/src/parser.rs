//! Version string parser
//!
//! A single left-to-right pass over the input. The three dot-separated core
//! numbers are checked for presence first; the remainder is split at the
//! first `+` (build metadata) and then at the first `-` (pre-release), and
//! each piece is validated in order: major, minor, patch, pre-release, build.
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

use crate::error::{Component, ParseError, Result};
use crate::identifier::{BuildMetadata, PreRelease};
use crate::numeric::{has_leading_zero, is_digits, Numeric};
use crate::version::Version;

/// Parse a version string into a validated [`Version`].
///
/// ```
/// use semverkit_core::{parse, ParseError};
///
/// let version = parse("1.0.0-rc.1+build.7").unwrap();
/// assert_eq!(version.major().as_str(), "1");
/// assert_eq!(version.pre_release().unwrap().to_string(), "rc.1");
///
/// assert_eq!(parse("1.2"), Err(ParseError::VersionNumberMustTakeFormXYZ));
/// ```
pub fn parse(input: &str) -> Result<Version> {
    parse_inner(input).inspect_err(|error| {
        tracing::trace!(input, rule = ?error, "rejected version string");
    })
}

fn parse_inner(input: &str) -> Result<Version> {
    let segments: Vec<&str> = input.split('.').collect();
    if segments.len() < 3 || segments[..3].iter().any(|s| s.is_empty()) {
        return Err(ParseError::VersionNumberMustTakeFormXYZ);
    }

    let major_text = segments[0];
    let minor_text = segments[1];
    // pre-release and build metadata may contain dots of their own
    let remainder = segments[2..].join(".");

    let (rest, build_text) = match remainder.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (remainder.as_str(), None),
    };
    let (patch_text, pre_text) = match rest.split_once('-') {
        Some((patch, pre)) => (patch, Some(pre)),
        None => (rest, None),
    };

    let major = parse_core_number(major_text, Component::Major)?;
    let minor = parse_core_number(minor_text, Component::Minor)?;
    let patch = parse_core_number(patch_text, Component::Patch)?;

    let pre_release = pre_text.map(PreRelease::parse).transpose()?;
    let build_metadata = build_text.map(BuildMetadata::parse).transpose()?;

    Ok(Version::from_parts(
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
    ))
}

fn parse_core_number(text: &str, component: Component) -> Result<Numeric> {
    if !is_digits(text) {
        return Err(ParseError::non_negative_integer(component));
    }
    if has_leading_zero(text) {
        return Err(ParseError::leading_zeros(component));
    }
    Ok(Numeric::from_canonical(text))
}
