//! # cinematch Storage
//!
//! Persistence layer for the cinematch recommendation engine.
//!
//! A built engine is expensive relative to the query path, so its
//! artifacts (item titles, vocabulary, similarity matrix) are captured
//! in an [`EngineSnapshot`] and written to disk by a [`SnapshotStore`].
//! Loading a snapshot restores a query-ready engine without any
//! recomputation, and the round-trip reproduces identical query
//! results.

pub mod error;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::{EngineSnapshot, SnapshotDescription, SnapshotStore};
