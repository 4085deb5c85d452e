//! Measurement Store
//!
//! Persisted key/value records keyed by a test-run identifier. The trait
//! abstracts the backend so the pipeline and tests do not care where
//! records live:
//! - `SledStore`: durable local store (sled + JSON values)
//! - `InMemoryStore`: for tests and one-shot runs
//!
//! Lookups return `Ok(None)` for absent keys — "unknown" is observable
//! and distinct from any stored value, including zero. Backend failures
//! are the one hard error class in the system: the pipeline aborts the
//! run on them.

mod ingest;
mod memory;
mod sled_store;

pub use ingest::{parse_scalar_block, parse_series_block, IngestError};
pub use memory::InMemoryStore;
pub use sled_store::SledStore;

use crate::types::{MeasurementBag, PressureSeries, Value};

/// Identifier of one test run (one report).
pub type RunId = u64;

/// Storage errors. All variants are fatal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Pluggable measurement-store backend.
pub trait MeasurementStore: Send + Sync {
    /// Store one named scalar for a run (overwrites).
    fn put_scalar(&self, run: RunId, name: &str, value: &Value) -> Result<(), StoreError>;

    /// Read one named scalar. `Ok(None)` when never stored.
    fn scalar(&self, run: RunId, name: &str) -> Result<Option<Value>, StoreError>;

    /// Store one named series for a run (overwrites).
    fn put_series(&self, run: RunId, name: &str, series: &PressureSeries) -> Result<(), StoreError>;

    /// Read one named series. `Ok(None)` when never stored.
    fn series(&self, run: RunId, name: &str) -> Result<Option<PressureSeries>, StoreError>;

    /// All scalar names stored for a run, with values.
    fn scalars(&self, run: RunId) -> Result<Vec<(String, Value)>, StoreError>;

    /// All series names stored for a run, with values.
    fn all_series(&self, run: RunId) -> Result<Vec<(String, PressureSeries)>, StoreError>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}

/// Assemble the full measurement bag for a run.
///
/// This is the single read path the pipeline uses; a backend failure
/// here aborts report generation.
pub fn gather_bag(store: &dyn MeasurementStore, run: RunId) -> Result<MeasurementBag, StoreError> {
    let mut bag = MeasurementBag::new();
    for (name, value) in store.scalars(run)? {
        bag.set(name, value);
    }
    for (name, series) in store.all_series(run)? {
        bag.set_series(name, series);
    }
    tracing::debug!(run, scalars = bag.len(), "measurement bag gathered");
    Ok(bag)
}
