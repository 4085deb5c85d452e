//! welltest-report binary
//!
//! Ingests pasted spreadsheet selections into the measurement store and
//! generates the placeholder snapshot for one test run.
//!
//! ```bash
//! # Ingest a pasted parameter block and the gauge log, then generate
//! welltest-report --run-id 42 \
//!     --scalars params.tsv \
//!     --gauge-log gauge.tsv \
//!     --config report.toml
//!
//! # Re-generate from already-stored measurements
//! welltest-report --run-id 42 --config report.toml
//! ```
//!
//! `RUST_LOG` controls logging (default: info).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use welltest_report::config::ReportConfig;
use welltest_report::pipeline::generate_report;
use welltest_report::render::SnapshotRenderer;
use welltest_report::storage::{parse_scalar_block, parse_series_block, MeasurementStore, SledStore};
use welltest_report::types::series_names;

#[derive(Parser, Debug)]
#[command(name = "welltest-report", version, about = "Well-test report derivation engine")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, env = "WELLTEST_CONFIG")]
    config: Option<PathBuf>,

    /// Test-run identifier
    #[arg(long)]
    run_id: u64,

    /// Pasted parameter block (tab-separated name/value rows) to ingest
    #[arg(long)]
    scalars: Option<PathBuf>,

    /// Pasted raw gauge log to ingest
    #[arg(long)]
    gauge_log: Option<PathBuf>,

    /// Pasted model-derived VNK curve to ingest
    #[arg(long)]
    model_vnk: Option<PathBuf>,

    /// Pasted KSD model curve to ingest
    #[arg(long)]
    model_ksd: Option<PathBuf>,

    /// Ingest only; skip report generation
    #[arg(long)]
    ingest_only: bool,
}

fn ingest(store: &SledStore, run: u64, args: &Args) -> Result<()> {
    if let Some(path) = &args.scalars {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read scalar block {}", path.display()))?;
        let entries = parse_scalar_block(&text);
        for (name, value) in &entries {
            store.put_scalar(run, name, value)?;
        }
        info!(run, count = entries.len(), "scalar parameters ingested");
    }

    let series_args = [
        (&args.gauge_log, series_names::GAUGE_LOG),
        (&args.model_vnk, series_names::MODEL_VNK),
        (&args.model_ksd, series_names::MODEL_KSD),
    ];
    for (path, name) in series_args {
        if let Some(path) = path {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read series block {}", path.display()))?;
            let series =
                parse_series_block(&text).with_context(|| format!("parsing series {name}"))?;
            store.put_series(run, name, &series)?;
            info!(run, name, points = series.len(), "series ingested");
        }
    }

    store.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ReportConfig::load(args.config.as_deref())?;

    let store = SledStore::open(&config.store_path)
        .with_context(|| format!("opening measurement store {}", config.store_path.display()))?;

    ingest(&store, args.run_id, &args)?;

    if args.ingest_only {
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output dir {}", config.output_dir.display()))?;

    let outcome = generate_report(&store, &SnapshotRenderer, &config, args.run_id)
        .context("report generation failed")?;
    info!(
        run = outcome.run,
        output = %outcome.output.display(),
        placeholders = outcome.placeholder_count,
        "done"
    );
    Ok(())
}
