//! Reference-pressure correction chains
//!
//! A gauge hangs at one depth; the report quotes pressures at named
//! datums (oil-water contact, datum plane, gas-oil contact). Each datum
//! value is the deepest-gauge reading adjusted by signed correction
//! offsets ("amendments") the interpreter entered for this run.

use serde::{Deserialize, Serialize};

/// Correction offsets for one pressure family (static or flowing) and
/// one horizon. Each offset may be absent, which combines as zero; the
/// absence is not materialized anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetSet {
    /// Gauge depth → oil-water contact (ВНК).
    pub to_vnk: Option<f64>,
    /// Oil-water contact → datum plane (ВДП).
    pub to_vdp: Option<f64>,
    /// Oil-water contact → gas-oil contact (ГНК).
    pub to_gnk: Option<f64>,
}

impl OffsetSet {
    /// True when the interpreter entered at least one offset. Drives
    /// whether a second-horizon correction pass runs at all.
    pub fn any_present(&self) -> bool {
        self.to_vnk.is_some() || self.to_vdp.is_some() || self.to_gnk.is_some()
    }
}

/// Corrected pressures for one family. Only materialized when the base
/// reading exists — a missing base never produces a partial family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureFamily {
    /// The deepest-gauge reading itself, echoed for the report.
    pub gauge: f64,
    /// At the oil-water contact: gauge − to_vnk.
    pub vnk: f64,
    /// At the datum plane: vnk + to_vdp.
    pub vdp: f64,
    /// At the gas-oil contact: vnk + to_gnk.
    pub gnk: f64,
}

/// Apply a correction chain to a base reading.
///
/// The VNK value anchors the chain; the datum-plane and gas-oil-contact
/// values are corrected relative to it, not to the gauge reading.
pub fn correct_family(base: Option<f64>, offsets: &OffsetSet) -> Option<PressureFamily> {
    let gauge = base?;
    let vnk = gauge - offsets.to_vnk.unwrap_or(0.0);
    Some(PressureFamily {
        gauge,
        vnk,
        vdp: vnk + offsets.to_vdp.unwrap_or(0.0),
        gnk: vnk + offsets.to_gnk.unwrap_or(0.0),
    })
}

/// A single extra VNK correction (the third/fourth static datum
/// variants): base − offset, only when both exist.
pub fn correct_single(base: Option<f64>, offset: Option<f64>) -> Option<f64> {
    Some(base? - offset?)
}
