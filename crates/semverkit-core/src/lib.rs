//! Semverkit Core - Semantic Versioning 2.0.0 parsing and precedence
//!
//! This crate turns version strings into validated [`Version`] values and
//! orders them by the precedence rules of <https://semver.org>.
//!
//! # Main Components
//!
//! - **Parser**: [`parse`] validates `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
//!   and reports exactly one [`ParseError`] naming the violated rule
//! - **Comparator**: [`compare`] and [`equals`] implement precedence; build
//!   metadata never takes part
//! - **Unbounded numbers**: [`Numeric`] holds components of any size exactly
//! - **Adapter**: [`SemanticVersion`] gives host types the same behaviour
//!
//! # Example
//!
//! ```
//! use semverkit_core::{compare, parse, Element};
//! use std::cmp::Ordering;
//!
//! let rc = parse("1.0.0-rc.1").unwrap();
//! let release = parse("1.0.0+build.42").unwrap();
//! assert_eq!(compare(&rc, &release), Ordering::Less);
//! assert_eq!(release.increment(Element::Minor).to_string(), "1.1.0");
//! ```
//!
//! Copyright (c) 2025 Semverkit Team
//! Licensed under the Apache-2.0 license

#[macro_use]
mod macros;

pub mod adapter;
pub mod compare;
pub mod error;
pub mod identifier;
pub mod numeric;
pub mod parser;
pub mod version;

#[cfg(test)]
mod proptest_strategies;

pub use adapter::{OsVersion, SemanticVersion};
pub use compare::{compare, equals};
pub use error::{Component, ParseError, Result};
pub use identifier::{BuildMetadata, Identifier, PreRelease};
pub use numeric::{InvalidNumeric, Numeric};
pub use parser::parse;
pub use version::{Element, Version};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
