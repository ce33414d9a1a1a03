//! Worker orchestration.
//!
//! One tokio task per worker. All of them share a single [`ErrorStore`]
//! and report every check outcome to it.

use crate::check::simulate_check;
use crate::config::LoadConfig;
use crate::error::RunnerError;
use fails::{ErrorStore, Snapshot};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Final report printed by the runner.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub service_name: String,
    /// Checks performed by all workers together. `None` if the run was cut short.
    pub checks: Option<usize>,
    pub unrecognized: usize,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl RunReport {
    pub fn new(service_name: impl Into<String>, checks: Option<usize>, snapshot: Snapshot) -> Self {
        Self {
            service_name: service_name.into(),
            checks,
            unrecognized: snapshot.unrecognized(),
            snapshot,
        }
    }
}

/// Run every worker to completion and return the number of checks made.
///
/// The check sequence is deterministic: check `i` of worker `w` takes slot
/// `w * checks_per_worker + i` of the configured mix.
///
/// If `shutdown` completes first, the workers are aborted and awaited
/// before returning `Ok(None)`, so no worker touches `store` afterwards.
pub async fn run_load<F>(
    load: &LoadConfig,
    store: Arc<ErrorStore>,
    shutdown: F,
) -> Result<Option<usize>, RunnerError>
where
    F: Future<Output = ()>,
{
    load.validate()?;
    info!(
        workers = load.workers,
        checks_per_worker = load.checks_per_worker,
        "starting load"
    );

    let mut tasks = JoinSet::new();
    for worker in 0..load.workers {
        let store = Arc::clone(&store);
        let mix = load.mix;
        let checks = load.checks_per_worker;
        let pace = load.pace();

        tasks.spawn(async move {
            let mut failed = 0usize;
            for index in 0..checks {
                let slot = (worker * checks + index) as u64;
                let outcome = simulate_check(worker, index, mix.pick(slot));
                if outcome.is_err() {
                    failed += 1;
                }
                store.record(&outcome);

                match pace {
                    Some(pace) => tokio::time::sleep(pace).await,
                    None => tokio::task::yield_now().await,
                }
            }
            debug!(worker, failed, "worker finished");
            checks
        });
    }

    tokio::pin!(shutdown);
    let mut performed = 0;
    loop {
        tokio::select! {
            joined = tasks.join_next() => match joined {
                Some(joined) => performed += joined?,
                None => return Ok(Some(performed)),
            },
            () = &mut shutdown => {
                tasks.abort_all();
                while tasks.join_next().await.is_some() {}
                debug!("workers stopped");
                return Ok(None);
            }
        }
    }
}
