//! Error types for unitfix-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in unitfix-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid UTF-8
    #[error("file '{path}' is not valid UTF-8")]
    Encoding { path: PathBuf },

    /// Input too short to contain the header line
    #[error("input has no header line (expected it at line 2)")]
    MissingHeader,

    /// CSV parsing error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No columns found when previewing a repaired table
    #[error("no columns found in repaired table")]
    NoColumns,

    /// Separator unusable for CSV preview parsing
    #[error("separator '{0}' is not an ASCII character")]
    InvalidSeparator(char),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
