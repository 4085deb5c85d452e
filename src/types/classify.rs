//! Fluid-type and research-type tag classification
//!
//! The source data carries both tags as operator-entered free text
//! (Cyrillic). Classification is by case-insensitive substring match;
//! the exact matched substrings are load-bearing and covered by tests.

use serde::{Deserialize, Serialize};

/// Fluid branch for viscosity-dependent formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidKind {
    Gas,
    Liquid,
}

impl FluidKind {
    /// Classify a free-text fluid tag. Any occurrence of "газ"
    /// (case-insensitive) selects the gas branch; everything else,
    /// including a missing tag, is liquid.
    pub fn classify(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if t.to_lowercase().contains("газ") => FluidKind::Gas,
            _ => FluidKind::Liquid,
        }
    }
}

/// Research-type family, driving pressure-source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    /// Build-up / fall-off family (КВД, КПД, КВУ, ...). The default.
    BuildUp,
    /// Drawdown family (КСД / АДД): flowing pressure comes from the last
    /// raw reading, static pressure from the KSD model curve.
    KsdFamily,
    /// Fracture-stimulation family (ГРП): static pressure is the explicit
    /// initial (instantaneous shut-in) pressure.
    FracFamily,
}

impl TestKind {
    /// Classify a free-text research-type tag.
    ///
    /// КСД wins over ГРП when both substrings occur, mirroring the order
    /// the source checks them in.
    pub fn classify(tag: Option<&str>) -> Self {
        let Some(t) = tag else {
            return TestKind::BuildUp;
        };
        let lower = t.to_lowercase();
        if lower.contains("ксд") {
            TestKind::KsdFamily
        } else if lower.contains("грп") {
            TestKind::FracFamily
        } else {
            TestKind::BuildUp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The literal tag strings below are fixtures carried over from the
    // production database; keep them verbatim.

    #[test]
    fn gas_tag_matched_by_substring() {
        assert_eq!(FluidKind::classify(Some("газ")), FluidKind::Gas);
        assert_eq!(FluidKind::classify(Some("Газоконденсат")), FluidKind::Gas);
        assert_eq!(FluidKind::classify(Some("ГАЗ")), FluidKind::Gas);
    }

    #[test]
    fn liquid_is_the_default_branch() {
        assert_eq!(FluidKind::classify(Some("нефть")), FluidKind::Liquid);
        assert_eq!(FluidKind::classify(Some("вода")), FluidKind::Liquid);
        assert_eq!(FluidKind::classify(None), FluidKind::Liquid);
    }

    #[test]
    fn ksd_family_tags() {
        assert_eq!(TestKind::classify(Some("КСД")), TestKind::KsdFamily);
        assert_eq!(TestKind::classify(Some("ИК+КСД")), TestKind::KsdFamily);
        assert_eq!(TestKind::classify(Some("ксд")), TestKind::KsdFamily);
    }

    #[test]
    fn frac_family_tags() {
        assert_eq!(TestKind::classify(Some("ГРП")), TestKind::FracFamily);
        assert_eq!(TestKind::classify(Some("КВД после ГРП")), TestKind::FracFamily);
    }

    #[test]
    fn build_up_is_the_default_family() {
        assert_eq!(TestKind::classify(Some("КВД")), TestKind::BuildUp);
        assert_eq!(TestKind::classify(Some("КВД_Хантос")), TestKind::BuildUp);
        assert_eq!(TestKind::classify(Some("КПД+ИД")), TestKind::BuildUp);
        assert_eq!(TestKind::classify(None), TestKind::BuildUp);
    }
}
