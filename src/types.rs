//! Domain types for `nappd`.
//!
//! `AppPath` is an opaque identifier; the crate never interprets it beyond
//! handing it to the loader. `Daemon` is a nominal handle whose only
//! construction path is [`crate::loader::from_app_path`].

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque application-path identifier accepted by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AppPath(pub PathBuf);

impl AppPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<PathBuf> for AppPath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

impl From<&Path> for AppPath {
    fn from(p: &Path) -> Self {
        Self(p.to_path_buf())
    }
}

impl From<String> for AppPath {
    fn from(s: String) -> Self {
        Self(PathBuf::from(s))
    }
}

impl From<&str> for AppPath {
    fn from(s: &str) -> Self {
        Self(PathBuf::from(s))
    }
}

// ---------------------------------------------------------------------------
// Daemon handle
// ---------------------------------------------------------------------------

/// A handle to a successfully loaded daemon application.
///
/// Fields are private and there is no `Deserialize` impl: the loader's
/// success channel is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Daemon {
    app_path: AppPath,
    loaded_at: DateTime<Utc>,
}

impl Daemon {
    pub(crate) fn new(app_path: AppPath) -> Self {
        Self {
            app_path,
            loaded_at: Utc::now(),
        }
    }

    /// The app path this handle was resolved from.
    pub fn app_path(&self) -> &AppPath {
        &self.app_path
    }

    /// When the loader produced this handle.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_path_display_and_from() {
        assert_eq!(AppPath::from("/srv/app.js").to_string(), "/srv/app.js");
        let a = AppPath::from("x");
        let b = AppPath::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn daemon_exposes_its_app_path() {
        let d = Daemon::new(AppPath::from("/srv/app.js"));
        assert_eq!(d.app_path(), &AppPath::from("/srv/app.js"));
        assert!(d.loaded_at() <= Utc::now());
    }

    #[test]
    fn daemon_serializes_with_app_path() {
        let d = Daemon::new(AppPath::from("/srv/app.js"));
        let json = serde_json::to_value(&d).expect("serialize");
        assert_eq!(json["app_path"], serde_json::json!("/srv/app.js"));
        assert!(json["loaded_at"].is_string());
    }
}
