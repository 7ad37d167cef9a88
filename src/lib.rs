//! Parse, validate and order toolchain versions.
//!
//! Versions have the form `major[.minor[.patch]][kind pre]`, where `kind` is
//! `alpha`, `beta` or `rc` and every number is a decimal of unbounded size.
//! The functions at the crate root take versions without a prefix (`1.21rc1`);
//! the [`toolchain`] module provides the same operations for prefixed names
//! (`go1.21rc1`).
//!
//! The ordering follows the release history of the toolchain. Up to minor
//! version 20 the first release of a minor version was named `1.N`, so a bare
//! `1.N` is the same as `1.N.0` and comes after `1.Nrc1`. From 1.21 onwards
//! the first release is `1.N.0`, and a bare `1.N` is the language version,
//! which comes before every pre-release and release of that minor version:
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(Ordering::Less, gover::compare("1.21", "1.21rc1"));
//! assert_eq!(Ordering::Less, gover::compare("1.21rc1", "1.21.0"));
//! assert_eq!(Ordering::Greater, gover::compare("1.18", "1.18rc1"));
//! ```
#![cfg_attr(
    test,
    allow(
        clippy::assertions_on_result_states,
        clippy::indexing_slicing,
        clippy::missing_asserts_for_indexing,
        clippy::panic,
        clippy::unwrap_used,
    )
)]
mod decimal;
mod error;
mod parser;
pub mod toolchain;
mod version;

use std::cmp::Ordering;

pub use crate::decimal::{compare_decimal, decrement_decimal};
pub use crate::error::Error;
pub use crate::version::{Kind, Version};

use crate::parser::parse_version;

/// Parses an unprefixed version.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] if `version` is not a valid version.
///
/// ```
/// let version = gover::parse("1.21rc2").unwrap();
///
/// assert_eq!(Some("21"), version.minor());
/// assert!(gover::parse("1.02").is_err());
/// ```
pub fn parse(version: &str) -> Result<Version, Error> {
    version.parse()
}

/// Compares two unprefixed versions. Invalid versions are equal to each
/// other and less than any valid version.
#[must_use]
pub fn compare(x: &str, y: &str) -> Ordering {
    parse_version(x).cmp(&parse_version(y))
}

#[must_use]
pub fn is_valid(version: &str) -> bool {
    parse_version(version).is_some()
}

/// Returns the language version of an unprefixed version, e.g. `1.21` for
/// `1.21.3`, or `None` if the version is invalid.
#[must_use]
pub fn lang(version: &str) -> Option<String> {
    parse_version(version).map(|v| v.language_version())
}

/// Returns whichever of the two versions is greater, or `x` if they are
/// equal.
#[must_use]
pub fn max<'a>(x: &'a str, y: &'a str) -> &'a str {
    if compare(x, y).is_lt() {
        y
    } else {
        x
    }
}
