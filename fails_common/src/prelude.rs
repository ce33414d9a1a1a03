//! Common re-exports.
//!
//! ```rust
//! use fails_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;
pub use crate::logging::init_tracing;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig, StoreConfig};

// ─── Defaults ───────────────────────────────────────────────────────
pub use crate::consts::{DEFAULT_CHECKS_PER_WORKER, DEFAULT_MESSAGE_CAPACITY, DEFAULT_WORKERS};
