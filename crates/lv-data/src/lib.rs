//! Dataset loading for the linked-view engine
//!
//! Turns a CSV byte stream into a validated [`lv_core::RecordStore`].
//! Rows failing validation are dropped and counted, never fatal; a missing
//! header or an empty result is.

pub mod config;
pub mod schema;
pub mod sources;

use tokio::task::JoinError;
use thiserror::Error;

// Re-exports
pub use config::{ColumnNames, LoadConfig, NullConfig};
pub use schema::ColumnLayout;
pub use sources::{load_records, CsvRecordSource, DropReason, LoadReport, LoadedDataset};

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Missing header row")]
    MissingHeader,

    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    #[error("No valid records after validation ({dropped} rows dropped)")]
    NoValidRecords { dropped: usize },

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}
