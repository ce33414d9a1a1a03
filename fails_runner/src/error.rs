//! Error types of the runner.

use common::config::ConfigError;
use fails::Failure;
use std::io;
use thiserror::Error;

/// Startup and reporting failures. Check failures never end up here.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Outcome of one failed synthetic check, as a worker would see it.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check produced an annotated failure.
    #[error("check failed")]
    Rejected(#[from] Failure),

    /// The connection broke before any response; nothing annotated it.
    #[error("transport error")]
    Transport(#[from] io::Error),
}
