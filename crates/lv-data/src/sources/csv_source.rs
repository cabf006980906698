use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use ahash::AHashMap;
use lv_core::data::{Record, RecordId, RecordSource, RecordStore};
use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::schema::ColumnLayout;
use crate::DataError;

/// Placeholder for a missing name or manufacturer
const UNKNOWN_LABEL: &str = "Unknown";

/// Why a single row was excluded from the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// A required cell is empty or matches a missing-value pattern
    MissingField(&'static str),

    /// A required numeric cell does not parse as a finite number
    NotNumeric(&'static str),

    /// The category label is not in the accepted set
    UnknownCategory(String),

    /// The row could not be decoded
    Unreadable(String),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingField(field) => write!(f, "missing {}", field),
            DropReason::NotNumeric(field) => write!(f, "{} is not numeric", field),
            DropReason::UnknownCategory(name) => write!(f, "unknown category '{}'", name),
            DropReason::Unreadable(msg) => write!(f, "unreadable row: {}", msg),
        }
    }
}

/// Outcome of validating every row
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Data rows read, header excluded
    pub rows_read: usize,

    /// Dropped rows as (1-based line number, reason)
    pub dropped: Vec<(usize, DropReason)>,
}

impl LoadReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn accepted_count(&self) -> usize {
        self.rows_read - self.dropped.len()
    }

    /// Number of dropped rows per reason
    pub fn drop_counts(&self) -> AHashMap<&DropReason, usize> {
        let mut counts = AHashMap::new();
        for (_, reason) in &self.dropped {
            *counts.entry(reason).or_insert(0) += 1;
        }
        counts
    }
}

/// A validated store together with its load report
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub store: Arc<RecordStore>,
    pub report: LoadReport,
}

/// Parse and validate a CSV byte stream
///
/// Fails when the header row is missing, a required column is absent, or
/// no row survives validation.
pub fn load_records(bytes: &[u8], config: &LoadConfig) -> Result<LoadedDataset, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DataError::MissingHeader);
    }

    let layout = ColumnLayout::resolve(&headers, &config.columns)?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (idx, result) in reader.records().enumerate() {
        report.rows_read += 1;
        // Header is line 1
        let line = idx + 2;

        let parsed = match result {
            Ok(row) => parse_row(&row, &layout, config),
            Err(e) => Err(DropReason::Unreadable(e.to_string())),
        };

        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!(line, %reason, "Dropped row");
                report.dropped.push((line, reason));
            }
        }
    }

    if records.is_empty() {
        return Err(DataError::NoValidRecords {
            dropped: report.dropped_count(),
        });
    }

    info!(
        rows = report.rows_read,
        accepted = records.len(),
        dropped = report.dropped_count(),
        "Loaded records"
    );

    Ok(LoadedDataset {
        store: Arc::new(RecordStore::from_records(records)),
        report,
    })
}

/// Validate one row into a record
fn parse_row(
    row: &StringRecord,
    layout: &ColumnLayout,
    config: &LoadConfig,
) -> Result<Record, DropReason> {
    let nulls = &config.null_config;
    let cell = |idx: usize| row.get(idx).and_then(|value| nulls.present(value));

    let number = |idx: usize, field: &'static str| -> Result<f64, DropReason> {
        let raw = cell(idx).ok_or(DropReason::MissingField(field))?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(DropReason::NotNumeric(field))
    };

    let mpg = number(layout.mpg, "mpg")?;
    let cylinders = number(layout.cylinders, "cylinders")?;
    let horsepower = number(layout.horsepower, "horsepower")?;
    let weight = number(layout.weight, "weight")?;
    let acceleration = number(layout.acceleration, "acceleration")?;

    let year = number(layout.model_year, "model_year")?;
    if year.fract() != 0.0 || year < i32::MIN as f64 || year > i32::MAX as f64 {
        return Err(DropReason::NotNumeric("model_year"));
    }

    let origin = cell(layout.origin).ok_or(DropReason::MissingField("origin"))?;
    if !config.accepts_category(origin) {
        return Err(DropReason::UnknownCategory(origin.to_string()));
    }

    // Displacement is optional and defaults to zero
    let displacement = layout
        .displacement
        .and_then(cell)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    let label = |idx: Option<usize>| idx.and_then(cell).unwrap_or(UNKNOWN_LABEL).to_string();

    Ok(Record {
        id: RecordId(0),
        name: label(layout.name),
        manufacturer: label(layout.manufacturer),
        mpg,
        cylinders,
        displacement,
        horsepower,
        weight,
        acceleration,
        model_year: year as i32,
        origin: origin.to_string(),
    })
}

/// CSV file on disk, parsed off the async runtime
pub struct CsvRecordSource {
    /// Path to the CSV file
    path: PathBuf,
    config: LoadConfig,
}

impl CsvRecordSource {
    pub fn new(path: PathBuf, config: LoadConfig) -> Self {
        Self { path, config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file, keeping the load report
    pub async fn read(&self) -> Result<LoadedDataset, DataError> {
        let path = self.path.clone();
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || -> Result<LoadedDataset, DataError> {
            let bytes = std::fs::read(&path)?;
            load_records(&bytes, &config)
        })
        .await?
    }
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    async fn load(&self) -> anyhow::Result<Arc<RecordStore>> {
        Ok(self.read().await?.store)
    }

    fn source_name(&self) -> &str {
        self.path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
    }
}
