//! Errors raised by the view coordinator

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::RecordId;
use crate::navigation::ZoomTransform;
use crate::state::ViewId;

/// A gesture the coordinator refuses
///
/// Rejected gestures leave every piece of state untouched.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Unknown view '{0}'")]
    UnknownView(ViewId),

    #[error("View '{source_view}' cannot brush; only '{owner}' owns the brush")]
    NotBrushOwner { source_view: ViewId, owner: ViewId },

    #[error("Category '{0}' is not in the configured set")]
    UnknownCategory(String),

    #[error("No record with id {0}")]
    UnknownRecord(RecordId),

    #[error("Transform has non-finite components: {0:?}")]
    InvalidTransform(ZoomTransform),

    #[error("Brush extent has non-finite endpoints: [{0}, {1}]")]
    InvalidBrush(f64, f64),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
