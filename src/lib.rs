//! welltest-report: well-test report derivation engine
//!
//! Computes derived well-test quantities (corrected reference-datum
//! pressures, productivity index, hydraulic conductivity, radius of
//! investigation, daily pressure delta) from a bag of named raw
//! measurements, and produces the flat placeholder map a document
//! template renderer consumes.
//!
//! ## Architecture
//!
//! - **Derivation Engine** (`engine`): pure function of the measurement
//!   bag — branch selection, correction chains, closed-form metrics
//! - **Measurement Store** (`storage`): pluggable persisted records per
//!   test run (sled-backed or in-memory), plus clipboard-paste ingestion
//! - **Rendering boundary** (`render`): per-field presentation rounding
//!   and the black-box template-renderer seam
//! - **Pipeline** (`pipeline`): the linear gather → derive → merge →
//!   render pass

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod types;

// Re-export the core vocabulary
pub use config::{ConfigError, ReportConfig};
pub use engine::{derive, DerivedBag, FlowingSource, OffsetSet, PressureFamily, StaticSource};
pub use pipeline::{generate_report, PipelineError, RunOutcome};
pub use render::{placeholder_map, RenderError, SnapshotRenderer, TemplateRenderer};
pub use storage::{InMemoryStore, MeasurementStore, RunId, SledStore, StoreError};
pub use types::{FluidKind, MeasurementBag, PressurePoint, PressureSeries, TestKind, Value};
