use nom::bytes::complete::take_while1;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map, map_opt, verify};
use nom::{IResult, Parser};

use crate::decimal::{is_canonical, Decimal};
use crate::version::{Kind, PreRelease, Version};

/// The first minor version whose bare `major.minor` form names the language
/// version instead of the `.0` release.
const FIRST_LANGUAGE_VERSION_MINOR: &str = "21";

fn decimal(input: &str) -> IResult<&str, Decimal> {
    map(verify(digit1, is_canonical), Decimal::from_digits).parse(input)
}

fn pre_release(input: &str) -> IResult<&str, PreRelease> {
    all_consuming(map(
        (
            map_opt(take_while1(|c: char| c.is_ascii_lowercase()), Kind::from_name),
            decimal,
        ),
        |(kind, number)| PreRelease { kind, number },
    ))
    .parse(input)
}

/// Parses an unprefixed version string such as `1.21rc2`, returning `None`
/// if any part of it is malformed.
pub(crate) fn parse_version(input: &str) -> Option<Version> {
    let (input, major) = decimal(input).ok()?;
    if input.is_empty() {
        // A lone major version is shorthand for major.0.0.
        return Some(Version {
            major,
            minor: Some(Decimal::zero()),
            patch: Some(Decimal::zero()),
            pre_release: None,
        });
    }

    let (input, minor) = decimal(input.strip_prefix('.')?).ok()?;
    if input.is_empty() {
        let patch = (minor < Decimal::from_digits(FIRST_LANGUAGE_VERSION_MINOR))
            .then(Decimal::zero);

        return Some(Version {
            major,
            minor: Some(minor),
            patch,
            pre_release: None,
        });
    }

    let Some(input) = input.strip_prefix('.') else {
        let (_, pre_release) = pre_release(input).ok()?;

        return Some(Version {
            major,
            minor: Some(minor),
            patch: None,
            pre_release: Some(pre_release),
        });
    };

    let (input, patch) = decimal(input).ok()?;
    let pre_release = if input.is_empty() {
        None
    } else {
        Some(pre_release(input).ok()?.1)
    };

    Some(Version {
        major,
        minor: Some(minor),
        patch: Some(patch),
        pre_release,
    })
}
