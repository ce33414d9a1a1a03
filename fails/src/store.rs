//! Concurrent failure store.
//!
//! One [`ErrorStore`] is created per benchmark run and shared by reference
//! with every worker. Workers call [`ErrorStore::add`]; once the run is over
//! the judge reads a [`Snapshot`].
//!
//! ## Locking
//!
//! A single `parking_lot::Mutex` guards the message trail and the three
//! counters. Logging and classification happen before the lock is taken;
//! only the append and the counter increment run under it, so every
//! snapshot sees messages and counters for the same set of failures.

use crate::classify::{Bucket, Classified, classify};
use crate::code::Code;
use crate::extract::{Chain, ChainExtractor, Extractor};
use crate::failure::BoxError;
use common::config::StoreConfig;
use common::consts::DEFAULT_MESSAGE_CAPACITY;
use parking_lot::Mutex;
use serde::Serialize;
use std::error::Error;
use tracing::{debug, warn};

/// Point-in-time copy of a store's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Display messages, oldest first.
    pub messages: Vec<String>,
    /// Critical and malformed failures.
    pub critical: usize,
    /// Application failures.
    pub application: usize,
    /// Timeouts and temporary failures.
    pub trivial: usize,
}

impl Snapshot {
    /// Failures that landed in one of the three counters.
    pub fn counted(&self) -> usize {
        self.critical + self.application + self.trivial
    }

    /// Failures that were reported but not counted (unrecognized code).
    pub fn unrecognized(&self) -> usize {
        self.messages.len().saturating_sub(self.counted())
    }

    /// True if no failure was recorded at all.
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Default)]
struct Tally {
    messages: Vec<String>,
    critical: usize,
    application: usize,
    trivial: usize,
}

impl Tally {
    fn apply(&mut self, classified: Classified) {
        match classified.category.bucket() {
            Some(Bucket::Critical) => self.critical += 1,
            Some(Bucket::Application) => self.application += 1,
            Some(Bucket::Trivial) => self.trivial += 1,
            None => {}
        }
        self.messages.push(classified.message);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            messages: self.messages.clone(),
            critical: self.critical,
            application: self.application,
            trivial: self.trivial,
        }
    }
}

/// Thread-safe accumulator of classified failures.
///
/// ```
/// use fails::{ErrorStore, Failure};
/// use std::sync::Arc;
///
/// let store = Arc::new(ErrorStore::new());
///
/// let worker = {
///     let store = Arc::clone(&store);
///     std::thread::spawn(move || {
///         store.add(Some(&Failure::critical("boom")));
///         store.add(None);
///     })
/// };
/// worker.join().unwrap();
///
/// let snapshot = store.snapshot();
/// assert_eq!(snapshot.messages, vec!["boom (critical)".to_string()]);
/// assert_eq!(snapshot.critical, 1);
/// ```
#[derive(Debug)]
pub struct ErrorStore<X = ChainExtractor> {
    extractor: X,
    tally: Mutex<Tally>,
}

impl ErrorStore<ChainExtractor> {
    /// Store with the default message capacity and [`ChainExtractor`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MESSAGE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_extractor(ChainExtractor, capacity)
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }
}

impl Default for ErrorStore<ChainExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Extractor> ErrorStore<X> {
    /// Store that reads codes and messages through `extractor`.
    pub fn with_extractor(extractor: X, capacity: usize) -> Self {
        debug!(capacity, "failure store created");
        Self {
            extractor,
            tally: Mutex::new(Tally {
                messages: Vec::with_capacity(capacity),
                ..Tally::default()
            }),
        }
    }

    /// Record one failure. `None` is ignored.
    ///
    /// The full error, including its source chain, is logged before the
    /// failure is counted.
    pub fn add(&self, err: Option<&(dyn Error + 'static)>) {
        let Some(err) = err else {
            return;
        };

        let classified = classify(&self.extractor, err);
        warn!(
            category = %classified.category,
            code = classified.code.as_ref().map(Code::as_str),
            error = %Chain(err),
            detail = ?err,
            "check failed"
        );

        self.tally.lock().apply(classified);
    }

    /// Record the error side of a check outcome. `Ok` is ignored.
    pub fn record<T, E>(&self, outcome: &Result<T, E>)
    where
        E: Error + 'static,
    {
        if let Err(err) = outcome {
            let err: &(dyn Error + 'static) = err;
            self.add(Some(err));
        }
    }

    /// [`record`](Self::record) for outcomes whose error side is a
    /// [`BoxError`], which does not implement `Error` itself.
    pub fn record_boxed<T>(&self, outcome: &Result<T, BoxError>) {
        if let Err(err) = outcome {
            let err: &(dyn Error + 'static) = &**err;
            self.add(Some(err));
        }
    }

    /// Messages and counters, read under one lock acquisition.
    pub fn snapshot(&self) -> Snapshot {
        self.tally.lock().snapshot()
    }

    /// Copy of the message trail, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.tally.lock().messages.clone()
    }
}
