//! Derivation Engine
//!
//! Pure computation of derived well-test quantities from a raw
//! measurement bag: branch selection, reference-pressure correction
//! chains, and the closed-form report metrics. No I/O, no shared state;
//! repeated invocations on the same bag are byte-identical.
//!
//! The pass runs in a fixed order:
//! 1. classify the fluid-type and research-type tags
//! 2. select and resolve the flowing/static pressure sources
//! 3. run the correction chains (twice when a second horizon exists)
//! 4. compute the derived metrics

pub mod branch;
pub mod corrections;
pub mod derived;

pub use branch::{FlowingSource, StaticSource};
pub use corrections::{OffsetSet, PressureFamily};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{keys, series_names, FluidKind, MeasurementBag, TestKind};

/// The engine's output bag: everything the rendering boundary needs,
/// disjoint from the raw inputs. Absent values stay absent here; the
/// boundary decides how each field renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedBag {
    pub fluid: FluidKind,
    pub test: TestKind,
    pub flowing_source: FlowingSource,
    pub static_source: StaticSource,

    /// Resolved static (reservoir) pressure operand.
    pub static_pressure: Option<f64>,
    /// Resolved flowing pressure operand.
    pub flowing_pressure: Option<f64>,

    /// Corrected static family, first horizon.
    pub static_family: Option<PressureFamily>,
    /// Corrected flowing family, first horizon.
    pub flowing_family: Option<PressureFamily>,
    /// Second-horizon families, present only when a second offset set was
    /// entered for that family.
    pub static_family_2: Option<PressureFamily>,
    pub flowing_family_2: Option<PressureFamily>,
    /// Extra static VNK datum variants.
    pub static_vnk_3: Option<f64>,
    pub static_vnk_4: Option<f64>,

    pub productivity_index: Option<f64>,
    pub daily_delta: Option<f64>,
    pub net_oil_rate: Option<f64>,
    pub kh_over_mu: Option<f64>,
    pub radius_of_investigation: Option<f64>,
    pub density_annotation: Option<String>,
}

/// Gather one family's offset set from the bag.
fn offsets(bag: &MeasurementBag, vnk: &str, vdp: &str, gnk: &str) -> OffsetSet {
    OffsetSet {
        to_vnk: bag.number(vnk),
        to_vdp: bag.number(vdp),
        to_gnk: bag.number(gnk),
    }
}

/// Run the full derivation pass over one measurement bag.
pub fn derive(bag: &MeasurementBag) -> DerivedBag {
    let fluid = FluidKind::classify(bag.text(keys::FLUID_TAG));
    let test = TestKind::classify(bag.text(keys::RESEARCH_TYPE));

    let model_series_present = bag.series(series_names::MODEL_VNK).is_some();
    let flowing_source = branch::select_flowing_source(test);
    let static_source = branch::select_static_source(test, model_series_present);

    let flowing_pressure = branch::resolve_flowing(bag, flowing_source);
    let static_pressure = branch::resolve_static(bag, static_source);

    debug!(
        ?test,
        ?fluid,
        ?flowing_source,
        ?static_source,
        "branch selection resolved"
    );

    // Correction chains run against the deepest-gauge readings, not the
    // branch-selected operands.
    let ppl_base = bag.number(keys::P_PL_ZAM);
    let pzab_base = bag.number(keys::P_ZAB_ZAM);

    let ppl_offsets = offsets(bag, keys::AMEND_VNK_PPL, keys::AMEND_VDP_PPL, keys::AMEND_GNK_PPL);
    let pzab_offsets = offsets(
        bag,
        keys::AMEND_VNK_PZAB,
        keys::AMEND_VDP_PZAB,
        keys::AMEND_GNK_PZAB,
    );
    let ppl_offsets_2 = offsets(
        bag,
        keys::AMEND_VNK_PPL_2,
        keys::AMEND_VDP_PPL_2,
        keys::AMEND_GNK_PPL_2,
    );
    let pzab_offsets_2 = offsets(
        bag,
        keys::AMEND_VNK_PZAB_2,
        keys::AMEND_VDP_PZAB_2,
        keys::AMEND_GNK_PZAB_2,
    );

    let static_family = corrections::correct_family(ppl_base, &ppl_offsets);
    let flowing_family = corrections::correct_family(pzab_base, &pzab_offsets);
    let static_family_2 = ppl_offsets_2
        .any_present()
        .then(|| corrections::correct_family(ppl_base, &ppl_offsets_2))
        .flatten();
    let flowing_family_2 = pzab_offsets_2
        .any_present()
        .then(|| corrections::correct_family(pzab_base, &pzab_offsets_2))
        .flatten();

    let static_vnk_3 = corrections::correct_single(ppl_base, bag.number(keys::AMEND_VNK_PPL_3));
    let static_vnk_4 = corrections::correct_single(ppl_base, bag.number(keys::AMEND_VNK_PPL_4));

    let viscosity = derived::branch_viscosity(
        fluid,
        bag.number(keys::VISCOSITY),
        bag.number(keys::GAS_VISCOSITY),
    );
    let duration = bag.number(keys::DURATION_HOURS);

    DerivedBag {
        fluid,
        test,
        flowing_source,
        static_source,
        static_pressure,
        flowing_pressure,
        static_family,
        flowing_family,
        static_family_2,
        flowing_family_2,
        static_vnk_3,
        static_vnk_4,
        productivity_index: derived::productivity_index(
            bag.number(keys::DELTA_Q),
            flowing_pressure,
            static_pressure,
        ),
        daily_delta: derived::daily_delta(bag.series(series_names::GAUGE_LOG), duration),
        net_oil_rate: derived::net_oil_rate(
            bag.number(keys::DELTA_Q),
            bag.number(keys::WATER_CUT),
            duration,
        ),
        kh_over_mu: derived::kh_over_mu(
            bag.number(keys::H_EFF),
            bag.number(keys::PERMEABILITY),
            viscosity,
        ),
        radius_of_investigation: derived::radius_of_investigation(
            bag.number(keys::PERMEABILITY),
            duration,
            bag.number(keys::POROSITY),
            viscosity,
            bag.number(keys::COMPRESSIBILITY),
        ),
        density_annotation: derived::density_annotation(
            bag.number(keys::DENSITY_KVD),
            bag.number(keys::DENSITY_WORK),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PressureSeries, Value};
    use chrono::NaiveDate;

    fn model_curve(last: f64) -> PressureSeries {
        let mut s = PressureSeries::default();
        let base = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        s.push(base, last - 10.0);
        s.push(base + chrono::Duration::hours(12), last);
        s
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut bag = MeasurementBag::new();
        bag.set(keys::DELTA_Q, 12.0);
        bag.set(keys::P_ZAB_FIRST, 180.0);
        bag.set_series(series_names::MODEL_VNK, model_curve(210.0));

        let first = derive(&bag);
        let second = derive(&bag);
        assert_eq!(first, second);
        assert_eq!(first.productivity_index, Some(0.4));
    }

    #[test]
    fn second_horizon_only_when_offsets_entered() {
        let mut bag = MeasurementBag::new();
        bag.set(keys::P_PL_ZAM, 250.0);
        bag.set(keys::AMEND_VNK_PPL, 5.0);

        let out = derive(&bag);
        assert!(out.static_family.is_some());
        assert!(out.static_family_2.is_none());

        bag.set(keys::AMEND_VNK_PPL_2, 7.0);
        let out = derive(&bag);
        let second = out.static_family_2.unwrap();
        assert_eq!(second.vnk, 243.0);
        // Both horizons correct the same base reading.
        assert_eq!(out.static_family.unwrap().gauge, second.gauge);
    }

    #[test]
    fn unrelated_results_survive_a_missing_input() {
        let mut bag = MeasurementBag::new();
        bag.set(keys::DELTA_Q, 12.0);
        bag.set(keys::P_ZAB_FIRST, 180.0);
        bag.set(keys::PRESSURE_LAST_POINT, 210.0);
        bag.set(keys::H_EFF, 10.0);
        bag.set(keys::PERMEABILITY, 50.0);
        bag.set(keys::VISCOSITY, 1.25);

        let complete = derive(&bag);
        assert!(complete.productivity_index.is_some());
        assert!(complete.kh_over_mu.is_some());

        // Dropping the flow-rate delta kills the productivity index only.
        let mut without_delta = bag.clone();
        without_delta.set(keys::DELTA_Q, Value::Absent);
        let out = derive(&without_delta);
        assert!(out.productivity_index.is_none());
        assert_eq!(out.kh_over_mu, complete.kh_over_mu);
    }
}
