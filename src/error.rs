//! Error types for the discovery and configuration boundary.
//!
//! Nothing inside the detector pipeline returns an error; structural
//! ambiguity there is handled by skipping the candidate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The target path does not exist or is neither a file nor a directory.
    #[error("{} is not a file or directory", .0.display())]
    InvalidTarget(PathBuf),

    /// Discovery found nothing to scan.
    #[error("No supported files found.")]
    NoFiles,

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
