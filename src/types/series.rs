//! Pressure time series

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One gauge reading: timestamp and pressure (kgf/cm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressurePoint {
    pub at: NaiveDateTime,
    pub pressure: f64,
}

/// An ordered sequence of gauge readings.
///
/// Stored series (model-derived VNK curve, KSD curve, raw gauge log) all
/// share this shape. Points are kept in the order they were ingested,
/// which for pasted spreadsheet selections is chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressureSeries {
    pub points: Vec<PressurePoint>,
}

impl PressureSeries {
    pub fn new(points: Vec<PressurePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Last recorded point, if any. Branch selection only ever consumes
    /// the tail of a series.
    pub fn last(&self) -> Option<&PressurePoint> {
        self.points.last()
    }

    /// Last recorded pressure value, if any.
    pub fn last_pressure(&self) -> Option<f64> {
        self.last().map(|p| p.pressure)
    }

    pub fn push(&mut self, at: NaiveDateTime, pressure: f64) {
        self.points.push(PressurePoint { at, pressure });
    }
}

/// Well-known series names persisted in the measurement store.
pub mod series_names {
    /// Model-derived pressure curve at the oil-water contact.
    pub const MODEL_VNK: &str = "ModelVNK";
    /// Model-derived curve for KSD (pressure-drawdown family) runs.
    pub const MODEL_KSD: &str = "ModelKSD";
    /// Raw gauge log for the whole test.
    pub const GAUGE_LOG: &str = "PressureVNK";
}
