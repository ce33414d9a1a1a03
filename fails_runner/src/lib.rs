//! # Fails Runner
//!
//! Synthetic load harness around the [`fails`] store. A configurable number
//! of workers run scripted checks concurrently; every failure is reported
//! to one shared store, and the final snapshot is logged or printed as JSON.

pub mod check;
pub mod config;
pub mod error;
pub mod run;

pub use config::{LoadConfig, Mix, Outcome, RunnerConfig};
pub use error::{CheckError, RunnerError};
pub use run::{RunReport, run_load};
