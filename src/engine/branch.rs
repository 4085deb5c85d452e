//! Branch selection: which readings stand in for the flowing and static
//! reservoir pressures
//!
//! The research-type tag and data availability pick the sources. The
//! static-pressure chain is a strict precedence order, not a single
//! switch — a bag that satisfies several conditions must resolve to the
//! highest-priority one.

use serde::{Deserialize, Serialize};

use crate::types::{keys, series_names, MeasurementBag, TestKind};

/// Where the "flowing pressure" operand comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowingSource {
    /// Reading closest to elapsed time zero (the conventional choice).
    FirstInstantReading,
    /// Last raw gauge reading (КСД / drawdown runs).
    LastRawReading,
}

/// Where the "static / reservoir pressure" operand comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticSource {
    /// Last value of the model-derived VNK pressure curve.
    ModelSeriesLastValue,
    /// Last value of the KSD-specific model curve.
    KsdSeriesLastValue,
    /// Explicit initial (instantaneous shut-in) pressure, ГРП runs.
    ExplicitInitialPressure,
    /// Operator-supplied pressure-at-last-point fallback.
    ExternallySuppliedLastPoint,
}

/// Select the flowing-pressure source from the research-type family.
pub fn select_flowing_source(test: TestKind) -> FlowingSource {
    match test {
        TestKind::KsdFamily => FlowingSource::LastRawReading,
        TestKind::BuildUp | TestKind::FracFamily => FlowingSource::FirstInstantReading,
    }
}

/// Select the static-pressure source.
///
/// Precedence, in order:
/// 1. a model-derived VNK curve exists → its last value
/// 2. КСД family → last value of the KSD curve
/// 3. ГРП family → the explicit initial pressure
/// 4. otherwise → the externally supplied last-point pressure
///
/// The selected source may still resolve to an absent value; selection
/// only looks at the model curve's presence, never at whether lower
/// rungs would have data.
pub fn select_static_source(test: TestKind, model_series_present: bool) -> StaticSource {
    if model_series_present {
        StaticSource::ModelSeriesLastValue
    } else {
        match test {
            TestKind::KsdFamily => StaticSource::KsdSeriesLastValue,
            TestKind::FracFamily => StaticSource::ExplicitInitialPressure,
            TestKind::BuildUp => StaticSource::ExternallySuppliedLastPoint,
        }
    }
}

/// Resolve a flowing-pressure source against the bag.
pub fn resolve_flowing(bag: &MeasurementBag, source: FlowingSource) -> Option<f64> {
    match source {
        FlowingSource::FirstInstantReading => bag.number(keys::P_ZAB_FIRST),
        FlowingSource::LastRawReading => bag
            .series(series_names::GAUGE_LOG)
            .and_then(|s| s.last_pressure()),
    }
}

/// Resolve a static-pressure source against the bag. Absence propagates:
/// a missing fallback yields `None`, never a default.
pub fn resolve_static(bag: &MeasurementBag, source: StaticSource) -> Option<f64> {
    match source {
        StaticSource::ModelSeriesLastValue => bag
            .series(series_names::MODEL_VNK)
            .and_then(|s| s.last_pressure()),
        StaticSource::KsdSeriesLastValue => bag
            .series(series_names::MODEL_KSD)
            .and_then(|s| s.last_pressure()),
        StaticSource::ExplicitInitialPressure => bag.number(keys::ISIP),
        StaticSource::ExternallySuppliedLastPoint => bag.number(keys::PRESSURE_LAST_POINT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ksd_family_takes_last_raw_reading() {
        assert_eq!(
            select_flowing_source(TestKind::KsdFamily),
            FlowingSource::LastRawReading
        );
        assert_eq!(
            select_flowing_source(TestKind::BuildUp),
            FlowingSource::FirstInstantReading
        );
        assert_eq!(
            select_flowing_source(TestKind::FracFamily),
            FlowingSource::FirstInstantReading
        );
    }

    #[test]
    fn model_series_outranks_everything() {
        // Even a КСД run with its own curve must use the VNK model curve
        // when one exists.
        assert_eq!(
            select_static_source(TestKind::KsdFamily, true),
            StaticSource::ModelSeriesLastValue
        );
        assert_eq!(
            select_static_source(TestKind::FracFamily, true),
            StaticSource::ModelSeriesLastValue
        );
    }

    #[test]
    fn family_markers_rank_below_model_series() {
        assert_eq!(
            select_static_source(TestKind::KsdFamily, false),
            StaticSource::KsdSeriesLastValue
        );
        assert_eq!(
            select_static_source(TestKind::FracFamily, false),
            StaticSource::ExplicitInitialPressure
        );
        assert_eq!(
            select_static_source(TestKind::BuildUp, false),
            StaticSource::ExternallySuppliedLastPoint
        );
    }

    #[test]
    fn absent_fallback_resolves_to_none() {
        let bag = MeasurementBag::new();
        assert_eq!(
            resolve_static(&bag, StaticSource::ExternallySuppliedLastPoint),
            None
        );
    }
}
