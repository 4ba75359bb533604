//! Daemon classification over a closed value domain.
//!
//! The classifier never probes structure at runtime: the domain is a closed
//! sum, so [`is_daemon`] is a total match on the variant tag.

use serde_json::{Map, Value};

use crate::types::Daemon;

/// Any value the classifier can be asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum AppValue {
    /// A handle produced by [`crate::loader::from_app_path`].
    Daemon(Daemon),
    /// A structured object of arbitrary shape.
    Object(Map<String, Value>),
    Text(String),
    Number(f64),
    Bool(bool),
    /// No value supplied at all.
    Absent,
}

impl From<Daemon> for AppValue {
    fn from(d: Daemon) -> Self {
        AppValue::Daemon(d)
    }
}

impl From<Map<String, Value>> for AppValue {
    fn from(m: Map<String, Value>) -> Self {
        AppValue::Object(m)
    }
}

impl From<String> for AppValue {
    fn from(s: String) -> Self {
        AppValue::Text(s)
    }
}

impl From<&str> for AppValue {
    fn from(s: &str) -> Self {
        AppValue::Text(s.to_owned())
    }
}

impl From<f64> for AppValue {
    fn from(n: f64) -> Self {
        AppValue::Number(n)
    }
}

impl From<i64> for AppValue {
    fn from(n: i64) -> Self {
        AppValue::Number(n as f64)
    }
}

impl From<bool> for AppValue {
    fn from(b: bool) -> Self {
        AppValue::Bool(b)
    }
}

/// Report whether `value` is a daemon handle.
///
/// Total and pure: never panics, never suspends, never touches I/O, and
/// repeated calls on the same value always agree.
pub fn is_daemon(value: &AppValue) -> bool {
    matches!(value, AppValue::Daemon(_))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppPath;

    #[test]
    fn daemon_variant_classifies_true() {
        let value = AppValue::from(Daemon::new(AppPath::from("/srv/app.js")));
        assert!(is_daemon(&value));
    }

    #[test]
    fn non_daemon_variants_classify_false() {
        assert!(!is_daemon(&AppValue::Object(Map::new())));
        assert!(!is_daemon(&AppValue::from("")));
        assert!(!is_daemon(&AppValue::from(42i64)));
        assert!(!is_daemon(&AppValue::from(true)));
        assert!(!is_daemon(&AppValue::Absent));
    }

    #[test]
    fn from_conversions_pick_the_matching_variant() {
        assert_eq!(AppValue::from("hi"), AppValue::Text("hi".to_owned()));
        assert_eq!(AppValue::from(1.5f64), AppValue::Number(1.5));
        assert_eq!(AppValue::from(false), AppValue::Bool(false));
    }
}
