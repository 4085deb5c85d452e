//! Report-generation pipeline
//!
//! One linear pass per run: gather the measurement bag from the store,
//! derive, merge into the placeholder map, render. No step is
//! resumable; a collaborator failure aborts the run with no partial
//! output. Missing measurements never abort — they flow through as
//! absent values and render as their conventional placeholders.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{ConfigError, ReportConfig};
use crate::engine;
use crate::render::{RenderError, TemplateRenderer};
use crate::storage::{gather_bag, MeasurementStore, RunId, StoreError};
use crate::types::keys;

/// Pipeline failures. Everything here is fatal for the run; per-value
/// problems never surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("measurement store failure: {0}")]
    Store(#[from] StoreError),
    #[error("renderer failure: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("run {0} has no measurements")]
    EmptyRun(RunId),
    #[error("run {0} has no research-type tag")]
    MissingResearchType(RunId),
}

/// Result of a successful run.
#[derive(Debug)]
pub struct RunOutcome {
    pub run: RunId,
    pub output: PathBuf,
    /// Placeholders the template wanted but the map did not carry.
    pub missing_placeholders: Vec<String>,
    /// How many placeholder entries were handed to the renderer.
    pub placeholder_count: usize,
}

/// Generate the report for one run.
pub fn generate_report(
    store: &dyn MeasurementStore,
    renderer: &dyn TemplateRenderer,
    config: &ReportConfig,
    run: RunId,
) -> Result<RunOutcome, PipelineError> {
    info!(run, backend = store.backend_name(), "report generation started");

    let bag = gather_bag(store, run)?;
    if bag.is_empty() {
        return Err(PipelineError::EmptyRun(run));
    }

    let research_type = bag
        .text(keys::RESEARCH_TYPE)
        .map(str::to_string)
        .ok_or(PipelineError::MissingResearchType(run))?;
    let template = config.template_for(&research_type)?;

    let derived = engine::derive(&bag);
    info!(
        run,
        test = ?derived.test,
        fluid = ?derived.fluid,
        static_source = ?derived.static_source,
        "derivation complete"
    );

    let map = crate::render::placeholder_map(&bag, &derived);
    let output = config.output_dir.join(format!("run_{run}.json"));

    let report = renderer.render(&map, &template, &output)?;
    for tag in &report.missing_placeholders {
        warn!(run, tag, "template placeholder not covered by the map");
    }

    info!(run, output = %output.display(), "report generation finished");
    Ok(RunOutcome {
        run,
        output,
        missing_placeholders: report.missing_placeholders,
        placeholder_count: map.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use crate::storage::InMemoryStore;
    use crate::types::Value;

    #[test]
    fn empty_run_is_a_hard_error() {
        let store = InMemoryStore::new();
        let renderer = RecordingRenderer::default();
        let config = ReportConfig::default();
        let err = generate_report(&store, &renderer, &config, 7).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyRun(7)));
    }

    #[test]
    fn missing_research_type_is_a_hard_error() {
        let store = InMemoryStore::new();
        store
            .put_scalar(1, keys::P_PL_ZAM, &Value::Number(250.0))
            .unwrap();
        let renderer = RecordingRenderer::default();
        let config = ReportConfig::default();
        let err = generate_report(&store, &renderer, &config, 1).unwrap_err();
        assert!(matches!(err, PipelineError::MissingResearchType(1)));
    }

    #[test]
    fn unknown_research_type_aborts_before_rendering() {
        let store = InMemoryStore::new();
        store
            .put_scalar(1, keys::RESEARCH_TYPE, &Value::Text("ГДИС-прочее".into()))
            .unwrap();
        let renderer = RecordingRenderer::default();
        let config = ReportConfig::default();
        let err = generate_report(&store, &renderer, &config, 1).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::UnknownResearchType(_))
        ));
        assert!(renderer.last_map.lock().unwrap().is_none());
    }
}
