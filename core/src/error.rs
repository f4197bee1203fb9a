//! Error types for the scouting pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the pipeline. None of them has a degraded mode.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// The log directory could not be listed, or an entry could not be stat'd.
    #[error("failed to read log directory {path}: {source}")]
    LogDirectory { path: PathBuf, source: io::Error },

    /// The log directory holds no regular files.
    #[error("no log files found in {0}")]
    NoLogFiles(PathBuf),

    /// The chosen log file could not be opened for tailing.
    #[error("failed to open log file {path}: {source}")]
    OpenLog { path: PathBuf, source: io::Error },

    /// Reading the tailed file failed for a reason other than end of file.
    #[error("failed to read log file: {0}")]
    Read(#[from] io::Error),
}

/// Errors delivering a batch. Logged by the submitter, never fatal.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected batch with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to encode batch: {0}")]
    Encode(#[from] serde_json::Error),
}
