//! Well-known parameter names in the measurement bag
//!
//! These are the names the surrounding application persists and the
//! document templates reference. The engine reads and writes them by
//! name; keeping them as constants avoids the string drift the legacy
//! system suffered from.

// === Raw readings ===

/// Static (shut-in) pressure at the deepest gauge, kgf/cm².
pub const P_PL_ZAM: &str = "P_pl_zam";
/// Flowing pressure at the deepest gauge, kgf/cm².
pub const P_ZAB_ZAM: &str = "P_zab_zam";
/// Flowing pressure at the first instant of the test (dt = 0), kgf/cm².
pub const P_ZAB_FIRST: &str = "P_zab_first";
/// Explicit initial pressure (instantaneous shut-in, ГРП runs), kgf/cm².
pub const ISIP: &str = "ISIP";
/// Externally supplied pressure-at-last-point fallback, kgf/cm².
pub const PRESSURE_LAST_POINT: &str = "pressureLastPoint";

// === Correction offsets (amendments), first horizon ===

pub const AMEND_VNK_PPL: &str = "amendVnkPpl";
pub const AMEND_VDP_PPL: &str = "amendVdpPpl";
pub const AMEND_GNK_PPL: &str = "amendGnkPpl";
pub const AMEND_VNK_PZAB: &str = "amendVnkPzab";
pub const AMEND_VDP_PZAB: &str = "amendVdpPzab";
pub const AMEND_GNK_PZAB: &str = "amendGnkPzab";

// === Correction offsets, second horizon ===

pub const AMEND_VNK_PPL_2: &str = "amendVnkPpl2";
pub const AMEND_VDP_PPL_2: &str = "amendVdpPpl2";
pub const AMEND_GNK_PPL_2: &str = "amendGnkPpl2";
pub const AMEND_VNK_PZAB_2: &str = "amendVnkPzab2";
pub const AMEND_VDP_PZAB_2: &str = "amendVdpPzab2";
pub const AMEND_GNK_PZAB_2: &str = "amendGnkPzab2";

// === Extra static VNK offsets (third/fourth datum variants) ===

pub const AMEND_VNK_PPL_3: &str = "amendVnkPpl3";
pub const AMEND_VNK_PPL_4: &str = "amendVnkPpl4";

// === Rock and fluid properties ===

/// Permeability, mD.
pub const PERMEABILITY: &str = "permeability";
/// Effective net pay thickness, m.
pub const H_EFF: &str = "H_eff";
/// Porosity, fraction.
pub const POROSITY: &str = "Phi";
/// Total compressibility, 1/(kgf/cm²).
pub const COMPRESSIBILITY: &str = "Compressibility";
/// Liquid viscosity, cP.
pub const VISCOSITY: &str = "viscosity";
/// Gas viscosity, cP.
pub const GAS_VISCOSITY: &str = "mu_gas";

// === Flow and test parameters ===

/// Flow-rate delta across the test, m³/day.
pub const DELTA_Q: &str = "Delta_Q";
/// Water cut, fraction (0..1).
pub const WATER_CUT: &str = "water_cut";
/// Test duration, hours.
pub const DURATION_HOURS: &str = "Durat";

// === Tags ===

/// Free-text fluid-type tag ("нефть", "газ", ...).
pub const FLUID_TAG: &str = "fluid";
/// Free-text research-type tag ("КВД", "КСД", "ГРП", ...).
pub const RESEARCH_TYPE: &str = "type_of_research";

// === Densities ===

/// Density used for the working (production) cycle recalculation, g/cm³.
pub const DENSITY_WORK: &str = "dens1";
/// Density used for the shut-in (КВД) interval recalculation, g/cm³.
pub const DENSITY_KVD: &str = "dens2";
