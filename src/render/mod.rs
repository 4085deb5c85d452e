//! Rendering boundary
//!
//! Turns the raw + derived bags into the single flat placeholder map the
//! document renderer consumes, applying presentation rounding exactly
//! once. Chained computations upstream run at full precision; nothing
//! here feeds back into the engine.
//!
//! The renderer itself is a black-box collaborator behind
//! [`TemplateRenderer`]; the shipped [`SnapshotRenderer`] writes the map
//! as JSON next to the report for the Office-automation step to consume.

mod rounding;

pub use rounding::{format_value, rule_for, Rounding};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::engine::DerivedBag;
use crate::types::{MeasurementBag, Value};

/// Renderer failures. Fatal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateMissing(PathBuf),
    #[error("render output error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the renderer reports back.
#[derive(Debug, Default, Clone)]
pub struct RenderReport {
    /// Placeholders the template referenced but the map did not carry.
    pub missing_placeholders: Vec<String>,
}

/// Black-box document renderer: flat string map + template in, filled
/// document out.
pub trait TemplateRenderer {
    fn render(
        &self,
        map: &BTreeMap<String, String>,
        template: &Path,
        output: &Path,
    ) -> Result<RenderReport, RenderError>;
}

/// Build the flat placeholder map for one run.
///
/// Raw bag values pass through first (formatted per field); derived
/// values land after and win on key collisions, so a stale stored copy
/// of a computed field never reaches the template. Every key the engine
/// is responsible for is always present — absent numerics render as the
/// conventional "0", absent text as the empty string, so the renderer
/// never stringifies a null.
pub fn placeholder_map(bag: &MeasurementBag, derived: &DerivedBag) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for (key, value) in bag.iter() {
        map.insert(key.to_string(), format_raw(key, value));
    }

    let mut put = |key: &str, value: Option<f64>| {
        map.insert(key.to_string(), format_value(rule_for(key), value));
    };

    // Static family, first horizon
    let f = derived.static_family;
    put("P_pl_zam", f.map(|f| f.gauge));
    put("P_pl_vnk", f.map(|f| f.vnk));
    put("P_pl_vdp", f.map(|f| f.vdp));
    put("P_pl_gnk", f.map(|f| f.gnk));

    // Flowing family, first horizon
    let f = derived.flowing_family;
    put("P_zab_zam", f.map(|f| f.gauge));
    put("P_zab_vnk", f.map(|f| f.vnk));
    put("P_zab_vdp", f.map(|f| f.vdp));
    put("P_zab_gnk", f.map(|f| f.gnk));

    // Second horizon (gauge readings are shared, only datums differ)
    let f = derived.static_family_2;
    put("P_pl_vnk_2", f.map(|f| f.vnk));
    put("P_pl_vdp_2", f.map(|f| f.vdp));
    put("P_pl_gnk_2", f.map(|f| f.gnk));
    let f = derived.flowing_family_2;
    put("P_zab_vnk_2", f.map(|f| f.vnk));
    put("P_zab_vdp_2", f.map(|f| f.vdp));
    put("P_zab_gnk_2", f.map(|f| f.gnk));

    // Extra static VNK datum variants
    put("P_pl_vnk_3", derived.static_vnk_3);
    put("P_pl_vnk_4", derived.static_vnk_4);

    // Branch-resolved operands
    put("P_pl", derived.static_pressure);
    put("P_zab", derived.flowing_pressure);

    // Derived metrics
    put("Kprod", derived.productivity_index);
    put("Pday", derived.daily_delta);
    put("Qoil", derived.net_oil_rate);
    put("Kh/Mu", derived.kh_over_mu);
    put("R_inv", derived.radius_of_investigation);

    map.insert(
        "density".to_string(),
        derived.density_annotation.clone().unwrap_or_default(),
    );

    map
}

/// Format a raw bag value for its placeholder.
fn format_raw(key: &str, value: &Value) -> String {
    match value {
        Value::Number(_) => format_value(rule_for(key), value.as_number()),
        Value::Text(s) => s.clone(),
        Value::Date(d) => d.format("%d.%m.%Y").to_string(),
        Value::Absent => String::new(),
    }
}

/// Renderer that writes the placeholder map as pretty JSON to the output
/// path. The downstream Office-automation step fills the actual document
/// from this snapshot.
pub struct SnapshotRenderer;

impl TemplateRenderer for SnapshotRenderer {
    fn render(
        &self,
        map: &BTreeMap<String, String>,
        template: &Path,
        output: &Path,
    ) -> Result<RenderReport, RenderError> {
        if !template.exists() {
            return Err(RenderError::TemplateMissing(template.to_path_buf()));
        }
        let json = serde_json::to_string_pretty(map).map_err(std::io::Error::other)?;
        std::fs::write(output, json)?;
        tracing::info!(output = %output.display(), placeholders = map.len(), "placeholder snapshot written");
        Ok(RenderReport::default())
    }
}

/// Test double that records the last map it was handed.
#[derive(Default)]
pub struct RecordingRenderer {
    pub last_map: Mutex<Option<BTreeMap<String, String>>>,
}

impl TemplateRenderer for RecordingRenderer {
    fn render(
        &self,
        map: &BTreeMap<String, String>,
        _template: &Path,
        _output: &Path,
    ) -> Result<RenderReport, RenderError> {
        if let Ok(mut slot) = self.last_map.lock() {
            *slot = Some(map.clone());
        }
        Ok(RenderReport::default())
    }
}
