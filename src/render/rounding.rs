//! Per-field presentation rounding
//!
//! Rounding is a boundary concern: the engine chains full-precision
//! values, and each field is rounded once, here, the way the report
//! templates expect it. The table mirrors the legacy spreadsheet-export
//! conventions: pressures to 1 decimal place, ratio-type quantities to
//! 2, viscosities and densities to 3, compressibility in scientific
//! notation with one digit, durations as whole hours.

/// How one field renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Fixed number of decimal places.
    Dp(usize),
    /// Scientific notation with one digit after the point (1.5E-5).
    Sci1,
    /// Rounded to a whole number.
    Int,
}

/// Look up the rounding rule for a placeholder key.
pub fn rule_for(key: &str) -> Rounding {
    match key {
        "Compressibility" => Rounding::Sci1,
        "Durat" | "duration" | "Leff1" | "Leff2" | "num_frac1" | "num_frac2" | "Xf1" | "Xf2" => {
            Rounding::Int
        }
        "viscosity" | "mu_gas" | "dens1" | "dens2" => Rounding::Dp(3),
        "Qoil" => Rounding::Dp(1),
        "Kprod" | "Kh/Mu" | "R_inv" | "Pday" | "permeability" | "Phi" | "Cs" => Rounding::Dp(2),
        _ if key.starts_with("S_") || key.contains("skin") => Rounding::Dp(2),
        // Pressures and their correction offsets.
        _ if key.starts_with("P_") || key.starts_with("amend") => Rounding::Dp(1),
        "ISIP" | "pressureLastPoint" => Rounding::Dp(1),
        _ => Rounding::Dp(2),
    }
}

/// Format a possibly-absent number under a rule. Absent renders as the
/// conventional "0" placeholder.
pub fn format_value(rule: Rounding, value: Option<f64>) -> String {
    let Some(v) = value else {
        return "0".to_string();
    };
    match rule {
        Rounding::Dp(places) => format!("{v:.places$}"),
        Rounding::Sci1 => format!("{v:.1E}"),
        Rounding::Int => format!("{}", v.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        assert_eq!(rule_for("P_pl_vnk"), Rounding::Dp(1));
        assert_eq!(rule_for("amendVnkPpl"), Rounding::Dp(1));
        assert_eq!(rule_for("Kprod"), Rounding::Dp(2));
        assert_eq!(rule_for("Kh/Mu"), Rounding::Dp(2));
        assert_eq!(rule_for("Compressibility"), Rounding::Sci1);
        assert_eq!(rule_for("Durat"), Rounding::Int);
        assert_eq!(rule_for("viscosity"), Rounding::Dp(3));
        assert_eq!(rule_for("S_meh1"), Rounding::Dp(2));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_value(Rounding::Dp(1), Some(245.04)), "245.0");
        assert_eq!(format_value(Rounding::Dp(2), Some(0.4)), "0.40");
        assert_eq!(format_value(Rounding::Sci1, Some(3.2e-5)), "3.2E-5");
        assert_eq!(format_value(Rounding::Int, Some(71.6)), "72");
        assert_eq!(format_value(Rounding::Dp(1), None), "0");
    }
}
