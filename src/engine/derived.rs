//! Derived report quantities
//!
//! Closed-form petroleum-engineering expressions. Every function is
//! pure: `Option<f64>` in, `Option<f64>` out, full precision (rounding
//! happens once at the rendering boundary). A missing operand, a zero
//! divisor, or a non-finite intermediate all yield `None` — never a
//! panic, never a NaN escaping into later stages.

use chrono::Duration;

use crate::types::{FluidKind, PressureSeries};

/// Minimum test duration (hours) for the daily pressure delta to be
/// meaningful. Shorter tests cannot contain a reading 24 h before the
/// last one.
const DAILY_DELTA_MIN_DURATION_HOURS: f64 = 30.0;

/// Tolerance around "exactly 24 hours before the last reading".
const DAILY_DELTA_TOLERANCE_MINUTES: i64 = 60;

/// Guard against division by zero and non-finite results.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Productivity index: |ΔQ / (Pzab − Pпл)|, m³/day per kgf/cm².
pub fn productivity_index(
    delta_q: Option<f64>,
    flowing: Option<f64>,
    static_pressure: Option<f64>,
) -> Option<f64> {
    let drawdown = flowing? - static_pressure?;
    finite((delta_q? / drawdown).abs())
}

/// Pressure change over the last day of the test.
///
/// Last gauge reading minus the reading closest to exactly 24 h before
/// it, within ±60 min. Skipped entirely for tests shorter than 30 h
/// (when a numeric duration is known); absent when no reading falls in
/// the tolerance window.
pub fn daily_delta(series: Option<&PressureSeries>, duration_hours: Option<f64>) -> Option<f64> {
    if let Some(hours) = duration_hours {
        if hours < DAILY_DELTA_MIN_DURATION_HOURS {
            return None;
        }
    }

    let series = series?;
    let last = series.last()?;

    let day = Duration::hours(24);
    let tolerance = Duration::minutes(DAILY_DELTA_TOLERANCE_MINUTES);

    // First reading whose distance from the last one is 24 h ± tolerance,
    // scanning from the start of the log.
    let previous = series.points.iter().find(|p| {
        let back = last.at - p.at;
        back >= day - tolerance && back <= day + tolerance
    })?;

    finite(last.pressure - previous.pressure)
}

/// Net oil over the test: ΔQ × (1 − water cut) × hours / 24, m³.
pub fn net_oil_rate(
    delta_q: Option<f64>,
    water_cut: Option<f64>,
    duration_hours: Option<f64>,
) -> Option<f64> {
    finite(delta_q? * (1.0 - water_cut?) * duration_hours? / 24.0)
}

/// Viscosity for the selected fluid branch. No cross-branch fallback:
/// a gas run with only the liquid viscosity present has no viscosity.
pub fn branch_viscosity(
    fluid: FluidKind,
    liquid_viscosity: Option<f64>,
    gas_viscosity: Option<f64>,
) -> Option<f64> {
    match fluid {
        FluidKind::Gas => gas_viscosity,
        FluidKind::Liquid => liquid_viscosity,
    }
}

/// Hydraulic conductivity group Kh/µ: (h × 100 × k / 1000) / µ,
/// D·cm/cP. `viscosity` must already be the branch-selected one.
pub fn kh_over_mu(
    net_pay_m: Option<f64>,
    permeability_md: Option<f64>,
    viscosity: Option<f64>,
) -> Option<f64> {
    finite((net_pay_m? * 100.0 * permeability_md? / 1000.0) / viscosity?)
}

/// Radius of investigation: 0.037 × sqrt(k·t / (φ·µ·ct)), m.
///
/// All four operands are required; a negative argument under the root
/// (bad signs in the inputs) comes out non-finite and therefore absent.
pub fn radius_of_investigation(
    permeability_md: Option<f64>,
    duration_hours: Option<f64>,
    porosity: Option<f64>,
    viscosity: Option<f64>,
    total_compressibility: Option<f64>,
) -> Option<f64> {
    let arg = (permeability_md? * duration_hours?) / (porosity? * viscosity? * total_compressibility?);
    finite(0.037 * arg.sqrt())
}

/// Human-readable density annotation for the report.
///
/// One density when only the shut-in value is known; both densities with
/// their fixed purpose labels otherwise. The wording is part of the
/// report template contract.
pub fn density_annotation(kvd_density: Option<f64>, work_density: Option<f64>) -> Option<String> {
    let kvd = kvd_density?;
    Some(match work_density {
        None => format!("{kvd} г/см3"),
        Some(work) => format!(
            "{kvd} г/см3 для пересчета участка КВД и {work} г/см3 - для пересчета цикла отработки скважины"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn productivity_index_worked_example() {
        let pi = productivity_index(Some(12.0), Some(180.0), Some(210.0));
        assert_eq!(pi, Some(0.4));
    }

    #[test]
    fn productivity_index_zero_drawdown_is_absent() {
        assert_eq!(productivity_index(Some(12.0), Some(200.0), Some(200.0)), None);
    }

    #[test]
    fn productivity_index_missing_operand_is_absent() {
        assert_eq!(productivity_index(None, Some(180.0), Some(210.0)), None);
        assert_eq!(productivity_index(Some(12.0), None, Some(210.0)), None);
        assert_eq!(productivity_index(Some(12.0), Some(180.0), None), None);
    }

    #[test]
    fn daily_delta_within_tolerance() {
        let mut series = PressureSeries::default();
        series.push(at(14, 11, 30), 92.5); // 24h30m before last — inside ±60m
        series.push(at(15, 12, 0), 100.0);
        assert_eq!(daily_delta(Some(&series), Some(48.0)), Some(7.5));
    }

    #[test]
    fn daily_delta_no_reading_in_window() {
        let mut series = PressureSeries::default();
        series.push(at(14, 6, 0), 90.0); // 30h before: outside
        series.push(at(14, 16, 0), 95.0); // 20h before: outside
        series.push(at(15, 12, 0), 100.0);
        assert_eq!(daily_delta(Some(&series), Some(48.0)), None);
    }

    #[test]
    fn daily_delta_short_test_skipped() {
        let mut series = PressureSeries::default();
        series.push(at(14, 12, 0), 92.5);
        series.push(at(15, 12, 0), 100.0);
        assert_eq!(daily_delta(Some(&series), Some(20.0)), None);
        // Unknown duration: the guard does not fire.
        assert_eq!(daily_delta(Some(&series), None), Some(7.5));
    }

    #[test]
    fn kh_over_mu_no_cross_branch_viscosity() {
        let mu = branch_viscosity(FluidKind::Gas, Some(1.2), None);
        assert_eq!(kh_over_mu(Some(10.0), Some(50.0), mu), None);

        let mu = branch_viscosity(FluidKind::Liquid, None, Some(0.02));
        assert_eq!(kh_over_mu(Some(10.0), Some(50.0), mu), None);

        let mu = branch_viscosity(FluidKind::Liquid, Some(1.25), Some(0.02));
        let kh = kh_over_mu(Some(10.0), Some(50.0), mu).unwrap();
        assert!((kh - 40.0).abs() < 1e-9);
    }

    #[test]
    fn radius_requires_all_operands() {
        let r = radius_of_investigation(Some(50.0), Some(72.0), Some(0.2), Some(1.25), Some(3e-5));
        let expected = 0.037 * ((50.0_f64 * 72.0) / (0.2 * 1.25 * 3e-5)).sqrt();
        assert_eq!(r, Some(expected));

        assert_eq!(
            radius_of_investigation(Some(50.0), Some(72.0), None, Some(1.25), Some(3e-5)),
            None
        );
    }

    #[test]
    fn radius_negative_argument_is_absent() {
        assert_eq!(
            radius_of_investigation(Some(-50.0), Some(72.0), Some(0.2), Some(1.25), Some(3e-5)),
            None
        );
    }

    #[test]
    fn density_annotation_variants() {
        assert_eq!(density_annotation(Some(0.85), None), Some("0.85 г/см3".to_string()));
        let both = density_annotation(Some(0.85), Some(0.92)).unwrap();
        assert!(both.contains("0.85 г/см3 для пересчета участка КВД"));
        assert!(both.contains("0.92 г/см3 - для пересчета цикла отработки скважины"));
        assert_eq!(density_annotation(None, Some(0.92)), None);
    }
}
