//! Extraction of code and display message from arbitrary errors.
//!
//! The classifier does not look at concrete error types itself. It asks an
//! [`Extractor`] for the `(code, message)` pair; a missing message means the
//! error is malformed from the report's point of view.

use crate::code::Code;
use crate::failure::Failure;
use std::error::Error;
use std::fmt;

/// Reads the annotations the store classifies on.
pub trait Extractor: Send + Sync {
    /// Failure code carried by `err`, if any.
    fn code_of(&self, err: &(dyn Error + 'static)) -> Option<Code>;

    /// Display message carried by `err`. `None` marks the error as malformed.
    fn message_of(&self, err: &(dyn Error + 'static)) -> Option<String>;
}

/// Default extractor: looks for [`Failure`] annotations along the
/// `source()` chain, outermost first.
///
/// Code and message are searched independently, so a code-only wrapper
/// around a message-only failure yields both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainExtractor;

impl Extractor for ChainExtractor {
    fn code_of(&self, err: &(dyn Error + 'static)) -> Option<Code> {
        failures(err).find_map(|failure| failure.code().cloned())
    }

    fn message_of(&self, err: &(dyn Error + 'static)) -> Option<String> {
        failures(err).find_map(|failure| failure.display_message().map(str::to_string))
    }
}

/// `err` followed by each of its transitive sources.
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> + 'a {
    std::iter::successors(Some(err), |e| (*e).source())
}

fn failures<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a Failure> + 'a {
    chain(err).filter_map(|e| e.downcast_ref::<Failure>())
}

/// Renders an error and all of its sources as `outer: inner: root`.
pub struct Chain<'a>(pub &'a (dyn Error + 'static));

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in chain(self.0).enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
