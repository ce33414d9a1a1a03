//! Runner configuration.
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "info"
//! service_name = "bench-01"
//!
//! [store]
//! initial_capacity = 100
//!
//! [load]
//! workers = 8
//! checks_per_worker = 50
//! pace_ms = 0
//!
//! [load.mix]
//! ok = 10
//! critical = 1
//! application = 1
//! timeout = 1
//! temporary = 1
//! unrecognized = 0
//! malformed = 0
//! ```

use common::config::{ConfigError, LogLevel, SharedConfig, StoreConfig};
use common::consts::{DEFAULT_CHECKS_PER_WORKER, DEFAULT_WORKERS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Full runner configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    pub shared: SharedConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

impl RunnerConfig {
    /// Configuration used when no file is given.
    pub fn named(service_name: impl Into<String>) -> Self {
        Self {
            shared: SharedConfig {
                log_level: LogLevel::default(),
                service_name: service_name.into(),
            },
            store: StoreConfig::default(),
            load: LoadConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.load.validate()
    }
}

/// Shape of the synthetic load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_checks")]
    pub checks_per_worker: usize,

    /// Delay between two checks of the same worker, in milliseconds.
    #[serde(default)]
    pub pace_ms: u64,

    #[serde(default)]
    pub mix: Mix,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_checks() -> usize {
    DEFAULT_CHECKS_PER_WORKER
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            checks_per_worker: DEFAULT_CHECKS_PER_WORKER,
            pace_ms: 0,
            mix: Mix::default(),
        }
    }
}

impl LoadConfig {
    pub fn pace(&self) -> Option<Duration> {
        (self.pace_ms > 0).then(|| Duration::from_millis(self.pace_ms))
    }

    /// Saturates for shapes that fail [`validate`](Self::validate).
    pub fn total_checks(&self) -> usize {
        self.workers.saturating_mul(self.checks_per_worker)
    }

    /// # Errors
    ///
    /// `ConfigError::ValidationError` if there are no workers, no checks, the
    /// total number of checks does not fit in `usize`, or every mix weight
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ValidationError(
                "load.workers must be at least 1".to_string(),
            ));
        }
        if self.checks_per_worker == 0 {
            return Err(ConfigError::ValidationError(
                "load.checks_per_worker must be at least 1".to_string(),
            ));
        }
        if self.workers.checked_mul(self.checks_per_worker).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "load.workers x load.checks_per_worker overflows ({} x {})",
                self.workers, self.checks_per_worker
            )));
        }
        if self.mix.total() == 0 {
            return Err(ConfigError::ValidationError(
                "load.mix needs at least one non-zero weight".to_string(),
            ));
        }
        Ok(())
    }
}

/// What a single synthetic check ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Critical,
    Application,
    Timeout,
    Temporary,
    Unrecognized,
    Malformed,
}

impl Outcome {
    pub const ALL: [Outcome; 7] = [
        Outcome::Ok,
        Outcome::Critical,
        Outcome::Application,
        Outcome::Timeout,
        Outcome::Temporary,
        Outcome::Unrecognized,
        Outcome::Malformed,
    ];
}

/// Relative weights of the outcomes.
///
/// Without a `[load.mix]` table the [`Default`] mix applies; inside a
/// table, omitted weights are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mix {
    #[serde(default)]
    pub ok: u32,
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub application: u32,
    #[serde(default)]
    pub timeout: u32,
    #[serde(default)]
    pub temporary: u32,
    #[serde(default)]
    pub unrecognized: u32,
    #[serde(default)]
    pub malformed: u32,
}

impl Default for Mix {
    fn default() -> Self {
        Self {
            ok: 10,
            critical: 1,
            application: 1,
            timeout: 1,
            temporary: 1,
            unrecognized: 0,
            malformed: 0,
        }
    }
}

impl Mix {
    pub fn weight(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Ok => self.ok,
            Outcome::Critical => self.critical,
            Outcome::Application => self.application,
            Outcome::Timeout => self.timeout,
            Outcome::Temporary => self.temporary,
            Outcome::Unrecognized => self.unrecognized,
            Outcome::Malformed => self.malformed,
        }
    }

    pub fn total(&self) -> u64 {
        Outcome::ALL.iter().map(|o| u64::from(self.weight(*o))).sum()
    }

    /// Outcome owning `slot` when the weights are laid end to end.
    /// `slot` wraps around the total, so any sequence number works.
    /// A mix with all weights zero always yields `Ok`.
    pub fn pick(&self, slot: u64) -> Outcome {
        let total = self.total();
        if total == 0 {
            return Outcome::Ok;
        }

        let mut slot = slot % total;
        for outcome in Outcome::ALL {
            let weight = u64::from(self.weight(outcome));
            if slot < weight {
                return outcome;
            }
            slot -= weight;
        }
        Outcome::Ok
    }
}
