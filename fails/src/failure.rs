//! Annotated error type raised by benchmark workers.
//!
//! A [`Failure`] optionally carries a [`Code`], a display message meant for
//! the final report, free-form key/value context for the diagnostic log,
//! and the underlying cause. Any of them may be missing; the classifier
//! decides what to make of the combination.

use crate::code::Code;
use std::error::Error;
use std::fmt;

/// Boxed, thread-safe error used as a failure cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Error annotated with a code and a display message.
///
/// ```
/// use fails::{Code, Failure};
///
/// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
/// let failure = Failure::wrap(io)
///     .with_code(Code::Timeout)
///     .with_message("GET /api/items did not answer")
///     .with_context("worker", "3");
///
/// assert_eq!(failure.code(), Some(&Code::Timeout));
/// assert_eq!(failure.display_message(), Some("GET /api/items did not answer"));
/// ```
#[derive(Debug, Default)]
pub struct Failure {
    code: Option<Code>,
    message: Option<String>,
    context: Vec<(String, String)>,
    source: Option<BoxError>,
}

impl Failure {
    /// Failure with a code and nothing else.
    pub fn new(code: Code) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    /// Failure with a display message and no code.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Annotate an arbitrary error. The result has neither code nor message
    /// until one is attached.
    pub fn wrap(cause: impl Into<BoxError>) -> Self {
        Self {
            source: Some(cause.into()),
            ..Self::default()
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Code::Critical).with_message(message)
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::new(Code::Application).with_message(message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(Code::Timeout).with_message(message)
    }

    pub fn temporary(message: impl Into<String>) -> Self {
        Self::new(Code::Temporary).with_message(message)
    }

    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a diagnostic key/value pair. Order is kept.
    pub fn with_context(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.context.push((key.into(), value.to_string()));
        self
    }

    pub fn with_source(mut self, cause: impl Into<BoxError>) -> Self {
        self.source = Some(cause.into());
        self
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "[{code}] {message}")?,
            (Some(code), None) => write!(f, "[{code}]")?,
            (None, Some(message)) => f.write_str(message)?,
            (None, None) => f.write_str("failure")?,
        }

        if !self.context.is_empty() {
            f.write_str(" {")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
