use std::path::PathBuf;

use thiserror::Error;

/// Errors a [`crate::session::ScanSession`] can fail with.
///
/// There is no local retry: any of these abort the walk and propagate to the
/// caller with the offending path and inner cause attached.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("consumer rejected node {key} at {path}: {source}")]
    Emit {
        path: PathBuf,
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("internal invariant violated at {path}: {message}")]
    InvariantViolation { path: PathBuf, message: String },
}

impl Error {
    pub fn path_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathIo {
            path: path.into(),
            source,
        }
    }

    pub fn invariant(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}
