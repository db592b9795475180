use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a report run.
///
/// Malformed rows never show up here: they are skipped by the aggregator.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input export could not be opened.
    #[error("Failed to open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input export was opened but a line could not be read.
    #[error("Failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output document or table could not be written.
    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV table: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
