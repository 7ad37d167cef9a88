//! Functions for toolchain names such as `go1.21.0` and `go1.22rc2-bigcorp`.
//!
//! A toolchain name is a version with a `go` prefix and an optional
//! `-suffix` naming a custom build. The suffix is ignored for validation and
//! ordering, and a name without the prefix is never valid.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::error::Error;
use crate::parser::parse_version;
use crate::version::Version;

const PREFIX: &str = "go";

/// Returns the version part of a toolchain name, or `None` if the name does
/// not start with `go`. Anything from the first `-` onwards is dropped.
///
/// ```
/// assert_eq!(Some("1.21.3"), gover::toolchain::strip_prefix("go1.21.3-bigcorp"));
/// assert_eq!(None, gover::toolchain::strip_prefix("1.21.3"));
/// ```
#[must_use]
pub fn strip_prefix(name: &str) -> Option<&str> {
    let (version, _) = name.split_once('-').unwrap_or((name, ""));
    version.strip_prefix(PREFIX)
}

fn parse_name(name: &str) -> Option<Version> {
    strip_prefix(name).and_then(parse_version)
}

/// Parses a toolchain name.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] holding the whole name if it lacks the
/// `go` prefix or the version after the prefix is invalid.
pub fn parse(name: &str) -> Result<Version, Error> {
    parse_name(name).ok_or_else(|| Error::invalid_version(name))
}

/// Formats a version as a toolchain name.
#[must_use]
pub fn to_name(version: &Version) -> String {
    format!("{PREFIX}{version}")
}

/// Compares two toolchain names. Invalid names, including ones without the
/// `go` prefix, are equal to each other and less than any valid name.
///
/// ```
/// use std::cmp::Ordering;
/// use gover::toolchain::compare;
///
/// assert_eq!(Ordering::Less, compare("go1.21", "go1.21rc1"));
/// assert_eq!(Ordering::Less, compare("go1.21rc1", "go1.21.0"));
/// assert_eq!(Ordering::Greater, compare("go1.18", "go1.18rc1"));
/// assert_eq!(Ordering::Less, compare("1.21", "go1"));
/// ```
#[must_use]
pub fn compare(x: &str, y: &str) -> Ordering {
    parse_name(x).cmp(&parse_name(y))
}

#[must_use]
pub fn is_valid(name: &str) -> bool {
    parse_name(name).is_some()
}

/// Returns whichever of the two names is greater, or `x` if they are equal.
#[must_use]
pub fn max<'a>(x: &'a str, y: &'a str) -> &'a str {
    if compare(x, y).is_lt() {
        y
    } else {
        x
    }
}

/// Returns the language version of a toolchain name, e.g. `go1.21` for
/// `go1.21.3`, or `None` if the name is invalid.
///
/// The result borrows from `name` when it is a prefix of it.
#[must_use]
pub fn lang(name: &str) -> Option<Cow<'_, str>> {
    let language = parse_name(name)?.language_version();

    let borrowed = name
        .get(..PREFIX.len() + language.len())
        .filter(|prefix| prefix.strip_prefix(PREFIX) == Some(language.as_str()));

    Some(match borrowed {
        Some(prefix) => Cow::Borrowed(prefix),
        None => Cow::Owned(format!("{PREFIX}{language}")),
    })
}
