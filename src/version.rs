use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::decimal::Decimal;
use crate::error::Error;
use crate::parser::parse_version;

/// The kind of a pre-release. Kinds are ranked in the order they're
/// declared.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Alpha,
    Beta,
    Rc,
}

impl Kind {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(Kind::Alpha),
            "beta" => Some(Kind::Beta),
            "rc" => Some(Kind::Rc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Alpha => "alpha",
            Kind::Beta => "beta",
            Kind::Rc => "rc",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PreRelease {
    pub(crate) kind: Kind,
    pub(crate) number: Decimal,
}

/// A parsed version of the form `major[.minor[.patch]][kind pre]`, without
/// any `go` prefix.
///
/// Parsing canonicalises the older spellings: `1` is read as `1.0.0`, and a
/// bare `1.N` is read as `1.N.0` while `N` is less than 21. From 21 onwards
/// `1.N` is kept as-is and denotes the language version, which orders before
/// every pre-release and release of that minor version.
///
/// ```
/// use gover::Version;
///
/// let language: Version = "1.21".parse().unwrap();
/// let candidate: Version = "1.21rc1".parse().unwrap();
/// let release: Version = "1.21.0".parse().unwrap();
///
/// assert!(language < candidate);
/// assert!(candidate < release);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    pub(crate) major: Decimal,
    pub(crate) minor: Option<Decimal>,
    pub(crate) patch: Option<Decimal>,
    pub(crate) pre_release: Option<PreRelease>,
}

impl Version {
    #[must_use]
    pub fn major(&self) -> &str {
        self.major.as_str()
    }

    #[must_use]
    pub fn minor(&self) -> Option<&str> {
        self.minor.as_ref().map(Decimal::as_str)
    }

    #[must_use]
    pub fn patch(&self) -> Option<&str> {
        self.patch.as_ref().map(Decimal::as_str)
    }

    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.pre_release.as_ref().map(|p| p.kind)
    }

    #[must_use]
    pub fn pre(&self) -> Option<&str> {
        self.pre_release.as_ref().map(|p| p.number.as_str())
    }

    /// Whether this denotes a language version (e.g. `1.21`) rather than a
    /// specific release or pre-release.
    #[must_use]
    pub fn is_language_version(&self) -> bool {
        self.patch.is_none() && self.pre_release.is_none()
    }

    /// Returns the `major[.minor]` language version that this version
    /// belongs to, e.g. `1.21` for `1.21.3` and `1.21rc2`.
    ///
    /// Go 1.0 predates the convention, so its language version is just `1`.
    #[must_use]
    pub fn language_version(&self) -> String {
        match self.minor() {
            Some("0") if self.major() == "1" => self.major().into(),
            Some(minor) => format!("{}.{}", self.major, minor),
            None => self.major().into(),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s).ok_or_else(|| Error::invalid_version(s))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = &self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = &self.patch {
            write!(f, ".{patch}")?;
        }
        if let Some(pre_release) = &self.pre_release {
            write!(f, "{}{}", pre_release.kind, pre_release.number)?;
        }
        Ok(())
    }
}

/// Compares pre-release kinds, with no kind meaning a final release.
///
/// A final release normally ranks below every kind, because a bare `1.21`
/// is the language version that precedes `1.21rc1`. Once a patch number is
/// present the release is a real one, so it ranks above its own
/// pre-releases instead.
fn compare_kinds(lhs: Option<Kind>, rhs: Option<Kind>, has_patch: bool) -> Ordering {
    match (lhs, rhs) {
        (None, Some(_)) if has_patch => Ordering::Greater,
        (Some(_), None) if has_patch => Ordering::Less,
        _ => lhs.cmp(&rhs),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            // Patches are equal at this point, so either side's patch works.
            .then_with(|| compare_kinds(self.kind(), other.kind(), self.patch.is_some()))
            .then_with(|| {
                let lhs = self.pre_release.as_ref().map(|p| &p.number);
                let rhs = other.pre_release.as_ref().map(|p| &p.number);
                lhs.cmp(&rhs)
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
