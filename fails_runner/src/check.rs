//! Synthetic checks.
//!
//! Each check pretends to request `GET /bench/{worker}/{index}` and fails
//! in the way its scheduled [`Outcome`] dictates, annotating the failure
//! the way a real worker would.

use crate::config::Outcome;
use crate::error::CheckError;
use fails::{Code, Failure};
use std::io;

/// Code used for the unrecognized outcome.
pub const UNLISTED_CODE: Code = Code::custom("error unlisted");

pub fn simulate_check(worker: usize, index: usize, outcome: Outcome) -> Result<(), CheckError> {
    let target = format!("GET /bench/{worker}/{index}");

    let failure = match outcome {
        Outcome::Ok => return Ok(()),
        Outcome::Critical => Failure::critical(format!("{target}: response body does not match"))
            .with_context("worker", worker),
        Outcome::Application => Failure::application(format!("{target}: unexpected status 500"))
            .with_context("worker", worker)
            .with_context("status", 500),
        Outcome::Timeout => Failure::wrap(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed"))
            .with_code(Code::Timeout)
            .with_message(target),
        Outcome::Temporary => {
            Failure::wrap(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
                .with_code(Code::Temporary)
                .with_message(target)
        }
        Outcome::Unrecognized => Failure::new(UNLISTED_CODE)
            .with_message(format!("{target}: header missing"))
            .with_context("worker", worker),
        Outcome::Malformed => {
            return Err(CheckError::Transport(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{target}: connection closed before response"),
            )));
        }
    };

    Err(CheckError::Rejected(failure))
}
