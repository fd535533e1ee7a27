use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PubmedError {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("{failed} input file(s) could not be read")]
    FilesFailed { failed: usize },
}

impl PubmedError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PubmedError>;
