use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building the restaurant table.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed dataset at line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported dataset format: {0} (expected .json, .jsonl or .ndjson)")]
    UnsupportedFormat(String),

    #[error("Invalid record #{index} ({name}): {reason}")]
    InvalidRecord { index: usize, name: String, reason: String },
}

pub type Result<T> = StdResult<T, CoreError>;
