//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a crawl log
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Crawl log not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read crawl log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse crawl log: {0}")]
    Parse(String),

    #[error("Crawl log is missing required column '{0}'")]
    MissingColumn(String),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
