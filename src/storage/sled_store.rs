//! Sled-backed measurement store
//!
//! Keys compose the run id (big-endian, so runs sort chronologically
//! when ids are monotonic) with the parameter name. Scalars and series
//! live in separate trees; values are JSON.

use std::path::Path;
use std::sync::Arc;

use crate::types::{PressureSeries, Value};

use super::{MeasurementStore, RunId, StoreError};

const SCALARS_TREE: &str = "scalars";
const SERIES_TREE: &str = "series";

/// Durable measurement store on a local sled database.
#[derive(Clone)]
pub struct SledStore {
    scalars: sled::Tree,
    series: sled::Tree,
    // Held so the database outlives the trees.
    _db: Arc<sled::Db>,
}

fn record_key(run: RunId, name: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(8 + 1 + name.len());
    key.extend_from_slice(&run.to_be_bytes());
    key.push(0);
    key.extend_from_slice(name.as_bytes());
    key
}

fn run_prefix(run: RunId) -> [u8; 9] {
    let mut prefix = [0u8; 9];
    prefix[..8].copy_from_slice(&run.to_be_bytes());
    prefix
}

fn name_from_key(key: &[u8]) -> Option<String> {
    let name = key.get(9..)?;
    String::from_utf8(name.to_vec()).ok()
}

impl SledStore {
    /// Open or create the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_ref = path.as_ref();
        let db = sled::open(path_ref)?;
        let scalars = db.open_tree(SCALARS_TREE)?;
        let series = db.open_tree(SERIES_TREE)?;
        tracing::info!(path = %path_ref.display(), "measurement store opened");
        Ok(Self {
            scalars,
            series,
            _db: Arc::new(db),
        })
    }

    /// Flush pending writes. Called by the pipeline after ingestion so a
    /// crash between paste and report loses nothing.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.scalars.flush()?;
        self.series.flush()?;
        Ok(())
    }
}

impl MeasurementStore for SledStore {
    fn put_scalar(&self, run: RunId, name: &str, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.scalars.insert(record_key(run, name), bytes)?;
        Ok(())
    }

    fn scalar(&self, run: RunId, name: &str) -> Result<Option<Value>, StoreError> {
        match self.scalars.get(record_key(run, name))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put_series(&self, run: RunId, name: &str, series: &PressureSeries) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(series)?;
        self.series.insert(record_key(run, name), bytes)?;
        Ok(())
    }

    fn series(&self, run: RunId, name: &str) -> Result<Option<PressureSeries>, StoreError> {
        match self.series.get(record_key(run, name))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn scalars(&self, run: RunId) -> Result<Vec<(String, Value)>, StoreError> {
        let mut out = Vec::new();
        for item in self.scalars.scan_prefix(run_prefix(run)) {
            let (key, bytes) = item?;
            let Some(name) = name_from_key(&key) else {
                continue;
            };
            out.push((name, serde_json::from_slice(&bytes)?));
        }
        Ok(out)
    }

    fn all_series(&self, run: RunId) -> Result<Vec<(String, PressureSeries)>, StoreError> {
        let mut out = Vec::new();
        for item in self.series.scan_prefix(run_prefix(run)) {
            let (key, bytes) = item?;
            let Some(name) = name_from_key(&key) else {
                continue;
            };
            out.push((name, serde_json::from_slice(&bytes)?));
        }
        Ok(out)
    }

    fn backend_name(&self) -> &'static str {
        "sled"
    }
}
