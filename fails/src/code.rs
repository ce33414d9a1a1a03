//! Machine-readable failure codes.

use common::consts::{CODE_APPLICATION, CODE_CRITICAL, CODE_TEMPORARY, CODE_TIMEOUT};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Code attached to a [`Failure`](crate::Failure) by the worker that raised it.
///
/// The four named variants are the codes the store counts. Anything else is
/// kept verbatim in [`Code::Other`] and classified as unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Code {
    /// Disqualifying failure; heavily penalised even once.
    Critical,
    /// The application under test behaved incorrectly.
    Application,
    /// The request timed out. Tolerated.
    Timeout,
    /// Transient failure. Tolerated.
    Temporary,
    /// A code this crate does not know about.
    Other(Cow<'static, str>),
}

impl Code {
    /// Build a code from its string form. Known strings map to their variant.
    pub fn parse(code: &str) -> Self {
        match code {
            CODE_CRITICAL => Code::Critical,
            CODE_APPLICATION => Code::Application,
            CODE_TIMEOUT => Code::Timeout,
            CODE_TEMPORARY => Code::Temporary,
            other => Code::Other(Cow::Owned(other.to_string())),
        }
    }

    /// Unknown code with a static name, usable in `const` position.
    pub const fn custom(code: &'static str) -> Self {
        Code::Other(Cow::Borrowed(code))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Code::Critical => CODE_CRITICAL,
            Code::Application => CODE_APPLICATION,
            Code::Timeout => CODE_TIMEOUT,
            Code::Temporary => CODE_TEMPORARY,
            Code::Other(code) => code.as_ref(),
        }
    }

    /// True for the four codes the store counts.
    pub fn is_known(&self) -> bool {
        !matches!(self, Code::Other(_))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Code::parse(s))
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Code::parse(code)
    }
}
