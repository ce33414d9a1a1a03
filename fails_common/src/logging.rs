//! `tracing` subscriber setup shared by the workspace binaries.

use crate::config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` is honoured; `level` is added on top of it as a directive.
/// With `json` set, events are written as JSON lines.
///
/// Returns `false` if a global subscriber was already installed (tests,
/// embedding applications), in which case nothing changes.
pub fn init_tracing(level: LogLevel, json: bool) -> bool {
    let filter = EnvFilter::from_default_env().add_directive(level.as_tracing().into());

    let result = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_ids(true)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .try_init()
    };

    result.is_ok()
}
