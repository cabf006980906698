//! Headless driver: load a dataset, replay gestures and print every redraw
//!
//! Each redraw snapshot is written to stdout as one JSON line; logs go to
//! stderr (`RUST_LOG` controls the level).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use lv_core::events::events::{DatasetLoaded, FilterChanged, HoverChanged};
use lv_core::{EngineConfig, EventBus, RecordSource, ViewEvent};
use lv_data::{CsvRecordSource, LoadConfig};
use lv_views::{RedrawRequested, ViewCoordinator};

mod demo;

/// Replay gestures against linked views of a car dataset
#[derive(Parser, Debug)]
#[command(name = "linkview", version, about)]
struct Args {
    /// CSV file with one car per row
    data: PathBuf,

    /// Engine configuration (JSON); built-in dashboard when omitted
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gesture script (JSON array of events); built-in tour when omitted
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn load_script(path: &Path) -> Result<Vec<ViewEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

/// Log what the renderer side would react to; print snapshots as JSON lines
fn attach_renderer(bus: &EventBus) {
    bus.subscribe_fn::<DatasetLoaded, _>(|event| {
        info!(
            source = %event.source_name,
            records = event.record_count,
            dropped = event.dropped_rows,
            "Dataset loaded"
        );
    });

    bus.subscribe_fn::<FilterChanged, _>(|event| {
        info!(
            category = %event.filter.category,
            brush = ?event.filter.brush,
            "Filter changed"
        );
    });

    bus.subscribe_fn::<HoverChanged, _>(|event| match &event.record {
        Some(record) => info!(id = %record.id, name = %record.name, "Hovering"),
        None => debug!("Hover cleared"),
    });

    bus.subscribe_fn::<RedrawRequested, _>(|event| {
        match serde_json::to_string(event.snapshot.as_ref()) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(view = %event.snapshot.view, error = %e, "Failed to encode snapshot"),
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let events = match &args.script {
        Some(path) => load_script(path)?,
        None => demo::default_script(&config),
    };

    let bus = Arc::new(EventBus::new());
    attach_renderer(&bus);

    let source = CsvRecordSource::new(
        args.data.clone(),
        LoadConfig::default().with_categories(&config.categories),
    );
    let dataset = source
        .read()
        .await
        .with_context(|| format!("Failed to load {}", source.path().display()))?;

    for (reason, count) in dataset.report.drop_counts() {
        warn!(%reason, count, "Dropped rows");
    }
    bus.publish(DatasetLoaded {
        source_name: source.source_name().to_string(),
        record_count: dataset.store.len(),
        dropped_rows: dataset.report.dropped_count(),
    });

    let mut coordinator = ViewCoordinator::new(dataset.store, config, bus.clone())
        .context("Failed to set up views")?;
    for (view, state) in coordinator.views() {
        info!(%view, chart = %state.chart, "View ready");
    }

    info!(events = events.len(), "Replaying gestures");
    let mut rejected = 0;
    for (step, event) in events.into_iter().enumerate() {
        let kind = event.kind();
        match coordinator.dispatch(event) {
            Ok(views) => debug!(step, kind, redrawn = views.len(), "Gesture applied"),
            Err(e) => {
                rejected += 1;
                warn!(step, kind, error = %e, "Gesture rejected");
            }
        }
    }

    info!(generation = coordinator.generation(), rejected, "Replay finished");
    Ok(())
}
