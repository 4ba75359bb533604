//! Asynchronous app-path loader.

use std::io::ErrorKind;

use tokio::fs;

use crate::error::{io_err, LoaderError};
use crate::types::{AppPath, Daemon};

/// Resolve the application at `path` into a [`Daemon`] handle.
///
/// The path is opaque; the only requirement is that it names an existing
/// regular file. Each call delivers exactly one outcome, and a failed
/// resolution never produces a handle. Resolution is repeatable: the same
/// path may be loaded any number of times, yielding independent handles.
/// Dropping the returned future abandons a pending resolution.
pub async fn from_app_path(path: impl Into<AppPath>) -> Result<Daemon, LoaderError> {
    let app_path = path.into();

    let metadata = match fs::metadata(app_path.as_path()).await {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoaderError::AppNotFound { path: app_path.0 });
        }
        Err(err) => return Err(io_err(app_path.as_path(), err)),
    };

    if !metadata.is_file() {
        return Err(LoaderError::NotAnApp { path: app_path.0 });
    }

    tracing::debug!(app = %app_path, "loaded daemon handle");
    Ok(Daemon::new(app_path))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
