use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for everything that can reach the caller.
///
/// Per-rule anomalies (bad weights, missing or malformed action sections)
/// never surface here; they degrade to a default value or exclude the rule.
#[derive(Debug, Error)]
pub enum RlsError {
    #[error("Invalid Path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("invalid requested action '{0}', expected KEY=VALUE")]
    InvalidRequest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, RlsError>;
