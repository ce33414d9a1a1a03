//! # Fails
//!
//! Classification and tally of the failures produced by benchmark workers.
//!
//! Workers executing checks against the system under test report every
//! failure to a shared [`ErrorStore`]. Each failure is logged in full,
//! classified into a [`Category`] from the [`Code`] and display message it
//! carries, and counted in one of three buckets. The judge reads the final
//! [`Snapshot`] to decide whether the run is disqualified or penalised.
//!
//! ## Architecture
//!
//! ```text
//! worker 1 ─┐
//! worker 2 ─┼─► ErrorStore::add ─► log ─► classify ─► lock { append + count }
//! worker N ─┘                                   │
//!                                               ▼
//!                                  Extractor (code, message)
//!
//! judge ─────► ErrorStore::snapshot ─► Snapshot { messages, critical, application, trivial }
//! ```
//!
//! ## Usage
//!
//! ```
//! use fails::{Code, ErrorStore, Failure};
//!
//! let store = ErrorStore::new();
//! store.add(Some(&Failure::timeout("GET /api/items")));
//! store.add(Some(&Failure::new(Code::Application).with_message("wrong item count")));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.trivial, 1);
//! assert_eq!(snapshot.application, 1);
//! assert_eq!(snapshot.messages[0], "GET /api/items (timed out)");
//! ```

pub mod classify;
pub mod code;
pub mod extract;
pub mod failure;
pub mod store;

pub use classify::{Bucket, Category, Classified, classify};
pub use code::Code;
pub use extract::{Chain, ChainExtractor, Extractor};
pub use failure::{BoxError, Failure};
pub use store::{ErrorStore, Snapshot};
