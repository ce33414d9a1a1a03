//! Fails Common Library
//!
//! Shared constants, configuration loading and logging setup for the
//! crates of the fails workspace.
//!
//! # Module Structure
//!
//! - [`consts`] - Failure codes, message annotations and defaults
//! - [`config`] - Configuration loading traits and types
//! - [`logging`] - `tracing` subscriber initialisation
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! common = { package = "fails_common", path = "../fails_common" }
//! ```
//!
//! ```rust
//! use fails_common::config::{ConfigLoader, SharedConfig};
//! use fails_common::consts::DEFAULT_MESSAGE_CAPACITY;
//! ```

pub mod config;
pub mod consts;
pub mod logging;
pub mod prelude;
