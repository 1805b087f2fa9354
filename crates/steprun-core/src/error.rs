use std::path::PathBuf;

use thiserror::Error;

use crate::ExitStatusCode;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("directory '{path}' not found")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

impl CoreError {
    #[must_use]
    pub fn exit_code(&self) -> ExitStatusCode {
        match self {
            Self::DirectoryNotFound { source, .. } => ExitStatusCode::from_io_error(source),
            Self::NotADirectory { .. } => ExitStatusCode::SENTINEL,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
