//! In-memory measurement store
//!
//! Not durable. Used by tests and by one-shot runs where the operator
//! supplies the whole bag up front.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::types::{PressureSeries, Value};

use super::{MeasurementStore, RunId, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    scalars: RwLock<BTreeMap<(RunId, String), Value>>,
    series: RwLock<BTreeMap<(RunId, String), PressureSeries>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl MeasurementStore for InMemoryStore {
    fn put_scalar(&self, run: RunId, name: &str, value: &Value) -> Result<(), StoreError> {
        self.scalars
            .write()
            .map_err(poisoned)?
            .insert((run, name.to_string()), value.clone());
        Ok(())
    }

    fn scalar(&self, run: RunId, name: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .scalars
            .read()
            .map_err(poisoned)?
            .get(&(run, name.to_string()))
            .cloned())
    }

    fn put_series(&self, run: RunId, name: &str, series: &PressureSeries) -> Result<(), StoreError> {
        self.series
            .write()
            .map_err(poisoned)?
            .insert((run, name.to_string()), series.clone());
        Ok(())
    }

    fn series(&self, run: RunId, name: &str) -> Result<Option<PressureSeries>, StoreError> {
        Ok(self
            .series
            .read()
            .map_err(poisoned)?
            .get(&(run, name.to_string()))
            .cloned())
    }

    fn scalars(&self, run: RunId) -> Result<Vec<(String, Value)>, StoreError> {
        Ok(self
            .scalars
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|((r, _), _)| *r == run)
            .map(|((_, name), value)| (name.clone(), value.clone()))
            .collect())
    }

    fn all_series(&self, run: RunId) -> Result<Vec<(String, PressureSeries)>, StoreError> {
        Ok(self
            .series
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|((r, _), _)| *r == run)
            .map(|((_, name), series)| (name.clone(), series.clone()))
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}
