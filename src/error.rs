//! Error types for the script injector.

use std::path::PathBuf;
use thiserror::Error;

/// Injector errors
///
/// `RootNotFound`, `RootUnreadable`, `RootNotDirectory`, `InvalidConfig` and `Logging`
/// are fatal and surface before any file is processed. `Read` and `Write` are per-file
/// and end up inside a [`FileOutcome`](crate::outcome::FileOutcome) instead of aborting the run.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Root directory not found: {path:?} ({source})")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root directory cannot be listed: {path:?} ({source})")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0:?}")]
    RootNotDirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}
