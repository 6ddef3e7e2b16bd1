use std::path::PathBuf;

use thiserror::Error;

/// Errors for the peakqc pipeline. Every failure aborts the run before any
/// output is written.
#[derive(Error, Debug)]
pub enum PeakQcError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Resource does not exist: {}", .0.display())]
    MissingResource(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error in {} (line {line}): {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Failed to open file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Signal track {}: {reason}", .path.display())]
    SignalTrack { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
