use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemechartError {
    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MemechartError>;
