//! Measurement bag — the engine's sole input

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::series::PressureSeries;
use super::value::Value;

/// A bag of named raw measurements for one test run.
///
/// Assembled once per report-generation run from the measurement store
/// and then treated as immutable. The derivation engine is a pure
/// function of this bag: it performs no I/O and never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementBag {
    values: BTreeMap<String, Value>,
    series: BTreeMap<String, PressureSeries>,
}

impl MeasurementBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar. `Value::Absent` is stored as-is so that an
    /// explicit "no data" survives round-trips through the store.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn set_series(&mut self, name: impl Into<String>, series: PressureSeries) {
        self.series.insert(name.into(), series);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Numeric lookup. Missing key, `Absent`, and unparseable text all
    /// read as `None` — the engine never distinguishes them.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_text)
    }

    /// A stored series, if present and non-empty. An empty series is
    /// treated as absent for branch-selection purposes.
    pub fn series(&self, name: &str) -> Option<&PressureSeries> {
        self.series.get(name).filter(|s| !s.is_empty())
    }

    /// Iterate scalar entries (used by the rendering boundary to pass
    /// raw values straight through to the placeholder map).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_series_reads_as_absent() {
        let mut bag = MeasurementBag::new();
        bag.set_series("ModelVNK", PressureSeries::default());
        assert!(bag.series("ModelVNK").is_none());

        let mut curve = PressureSeries::default();
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        curve.push(t, 210.0);
        bag.set_series("ModelVNK", curve);
        assert_eq!(
            bag.series("ModelVNK").and_then(|s| s.last_pressure()),
            Some(210.0)
        );
    }

    #[test]
    fn absent_and_missing_read_the_same() {
        let mut bag = MeasurementBag::new();
        bag.set("a", Value::Absent);
        assert_eq!(bag.number("a"), None);
        assert_eq!(bag.number("never_set"), None);
    }
}
