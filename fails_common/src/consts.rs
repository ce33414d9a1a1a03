//! Workspace-wide constants.
//!
//! Single source of truth for failure code strings, the annotations appended
//! to display messages and the defaults used by the store and the runner.

/// Code string for failures that disqualify or heavily penalise a run.
pub const CODE_CRITICAL: &str = "error critical";

/// Code string for misbehaviour of the application under test.
pub const CODE_APPLICATION: &str = "error application";

/// Code string for requests that timed out.
pub const CODE_TIMEOUT: &str = "error timeout";

/// Code string for transient failures.
pub const CODE_TEMPORARY: &str = "error temporary";

/// Appended to the display message of critical failures.
pub const CRITICAL_NOTE: &str = " (critical)";

/// Appended to the display message of timeouts.
pub const TIMEOUT_NOTE: &str = " (timed out)";

/// Appended to the display message of temporary failures.
pub const TEMPORARY_NOTE: &str = " (temporary)";

/// Replaces the display message of errors that carry no message at all.
pub const OPERATOR_NOTICE: &str = "unexpected error: contact the administrators";

/// Initial capacity of the message trail of a fresh store.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 100;

/// Default number of concurrent workers in the load runner.
pub const DEFAULT_WORKERS: usize = 8;

/// Default number of checks each runner worker performs.
pub const DEFAULT_CHECKS_PER_WORKER: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [CODE_CRITICAL, CODE_APPLICATION, CODE_TIMEOUT, CODE_TEMPORARY];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn notes_start_with_space() {
        for note in [CRITICAL_NOTE, TIMEOUT_NOTE, TEMPORARY_NOTE] {
            assert!(note.starts_with(' '));
        }
    }

    #[test]
    fn defaults_are_positive() {
        assert!(DEFAULT_MESSAGE_CAPACITY > 0);
        assert!(DEFAULT_WORKERS > 0);
        assert!(DEFAULT_CHECKS_PER_WORKER > 0);
    }
}
