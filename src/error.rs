use std::path::PathBuf;

use thiserror::Error;

/// Error surface for the app-path loader.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no application at '{path}'")]
    AppNotFound { path: PathBuf },

    #[error("'{path}' exists but is not an application file")]
    NotAnApp { path: PathBuf },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoaderError {
    LoaderError::Io {
        path: path.into(),
        source,
    }
}
