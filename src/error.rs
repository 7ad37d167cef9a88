use std::error;
use std::fmt;

#[expect(clippy::error_impl_error)]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The string is the input that could not be parsed as a version.
    InvalidVersion(String),
}

fn escape<I: fmt::Display>(input: I) -> String {
    input.to_string().replace('"', "\\\"")
}

impl Error {
    pub(crate) fn invalid_version(input: &str) -> Self {
        Error::InvalidVersion(escape(input))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidVersion(i) => write!(f, "invalid version \"{i}\""),
        }
    }
}

impl error::Error for Error {}
