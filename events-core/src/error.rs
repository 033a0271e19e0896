//! Error types for bristol-events.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while syncing, loading or configuring.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Events directory not found at {}", .0.display())]
    MirrorMissing(PathBuf),

    #[error("git not found in PATH")]
    GitNotInstalled,

    #[error("Sync error: {0}")]
    Sync(String),

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Start time {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bristol-events operations.
pub type EventsResult<T> = Result<T, EventsError>;
