//! # Fails Runner Binary
//!
//! ```bash
//! # Defaults: 8 workers x 50 checks
//! fails_runner
//!
//! # From a config file, overriding the worker count
//! fails_runner --config run.toml --workers 32
//!
//! # JSON logs, JSON report on stdout
//! fails_runner --json --report-json
//! ```

use clap::Parser;
use common::prelude::*;
use fails::ErrorStore;
use fails_runner::{RunReport, RunnerConfig, RunnerError, run_load};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

/// Fails Runner - concurrent workers feeding one failure store
#[derive(Parser, Debug)]
#[command(name = "fails_runner")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Synthetic load harness for the failure store")]
#[command(long_about = None)]
struct Args {
    /// Path to the runner configuration (TOML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the number of workers.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Override the number of checks per worker.
    #[arg(long)]
    checks: Option<usize>,

    /// Run name used when no config file is given.
    #[arg(long, default_value = "fails-runner")]
    name: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    report_json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("runner failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RunnerError> {
    let args = Args::parse();

    let loaded = load_config(&args);
    let level = match &loaded {
        _ if args.verbose => LogLevel::Debug,
        Ok(config) => config.shared.log_level,
        Err(_) => LogLevel::Info,
    };
    init_tracing(level, args.json);
    let config = loaded?;

    info!(
        "fails_runner v{} starting run {}",
        env!("CARGO_PKG_VERSION"),
        config.shared.service_name
    );

    let store = Arc::new(ErrorStore::from_config(&config.store));

    let interrupted = async {
        match signal::ctrl_c().await {
            Ok(()) => warn!("interrupted, reporting partial results"),
            Err(e) => {
                error!("cannot listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    let checks = run_load(&config.load, Arc::clone(&store), interrupted).await?;

    let report = RunReport::new(config.shared.service_name.clone(), checks, store.snapshot());
    info!(
        checks = ?report.checks,
        failures = report.snapshot.messages.len(),
        critical = report.snapshot.critical,
        application = report.snapshot.application,
        trivial = report.snapshot.trivial,
        unrecognized = report.unrecognized,
        "run finished"
    );

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<RunnerConfig, RunnerError> {
    let mut config = match &args.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::named(args.name.clone()),
    };

    if let Some(workers) = args.workers {
        config.load.workers = workers;
    }
    if let Some(checks) = args.checks {
        config.load.checks_per_worker = checks;
    }

    config.validate()?;
    Ok(config)
}
