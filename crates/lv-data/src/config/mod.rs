//! Loader configuration

pub mod load_config;
pub mod null_handling;

pub use load_config::{ColumnNames, LoadConfig};
pub use null_handling::NullConfig;
