//! Severity classification of check failures.
//!
//! ## Policy
//!
//! | extracted code     | category       | display message                 | counter       |
//! |--------------------|----------------|---------------------------------|---------------|
//! | `Critical`         | `Critical`     | message + `" (critical)"`       | critical      |
//! | `Application`      | `Application`  | message                         | application   |
//! | `Timeout`          | `Timeout`      | message + `" (timed out)"`      | trivial       |
//! | `Temporary`        | `Temporary`    | message + `" (temporary)"`      | trivial       |
//! | other / none       | `Unrecognized` | message                         | none          |
//! | (no message)       | `Malformed`    | operator notice                 | critical      |
//!
//! A missing message takes precedence over whatever code is present.
//! Classification is total: every error maps to exactly one category.

use crate::code::Code;
use crate::extract::Extractor;
use common::consts::{CRITICAL_NOTE, OPERATOR_NOTICE, TEMPORARY_NOTE, TIMEOUT_NOTE};
use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Severity category of a single failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Critical,
    Application,
    Timeout,
    Temporary,
    /// Code missing or not one of the four known codes. Reported, not counted.
    Unrecognized,
    /// No display message could be extracted. Counted as critical.
    Malformed,
}

/// Counter a category contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Critical,
    Application,
    /// Timeouts and temporary failures, treated leniently by the judge.
    Trivial,
}

impl Category {
    /// Category for a failure that does carry a display message.
    pub fn from_code(code: Option<&Code>) -> Self {
        match code {
            Some(Code::Critical) => Category::Critical,
            Some(Code::Application) => Category::Application,
            Some(Code::Timeout) => Category::Timeout,
            Some(Code::Temporary) => Category::Temporary,
            Some(Code::Other(_)) | None => Category::Unrecognized,
        }
    }

    /// `None` for unrecognized failures, which no counter tracks.
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            Category::Critical | Category::Malformed => Some(Bucket::Critical),
            Category::Application => Some(Bucket::Application),
            Category::Timeout | Category::Temporary => Some(Bucket::Trivial),
            Category::Unrecognized => None,
        }
    }

    /// Annotation appended to the extracted message.
    fn note(self) -> &'static str {
        match self {
            Category::Critical => CRITICAL_NOTE,
            Category::Timeout => TIMEOUT_NOTE,
            Category::Temporary => TEMPORARY_NOTE,
            Category::Application | Category::Unrecognized | Category::Malformed => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Critical => "critical",
            Category::Application => "application",
            Category::Timeout => "timeout",
            Category::Temporary => "temporary",
            Category::Unrecognized => "unrecognized",
            Category::Malformed => "malformed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one failure. Not stored; only its message is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub category: Category,
    /// Code the category was derived from, kept for the diagnostic log.
    pub code: Option<Code>,
    pub message: String,
}

/// Classify `err` using the annotations `extractor` finds on it.
pub fn classify<X>(extractor: &X, err: &(dyn Error + 'static)) -> Classified
where
    X: Extractor + ?Sized,
{
    let code = extractor.code_of(err);
    let Some(mut message) = extractor.message_of(err) else {
        return Classified {
            category: Category::Malformed,
            code,
            message: OPERATOR_NOTICE.to_string(),
        };
    };

    let category = Category::from_code(code.as_ref());
    message.push_str(category.note());

    Classified {
        category,
        code,
        message,
    }
}
