use std::path::PathBuf;

use crate::source::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The cache location cannot be read or written; fatal at startup.
    #[error("cache storage unavailable at {path}")]
    Storage {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

impl IndexError {
    pub(crate) fn storage(path: impl Into<PathBuf>, cause: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            cause,
        }
    }
}
