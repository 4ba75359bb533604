//! Daemon handle loading and classification.
//!
//! Public API surface:
//! - [`loader::from_app_path`] — async factory resolving an opaque app path
//!   into a [`Daemon`] handle.
//! - [`classify::is_daemon`] — pure predicate recognising handles produced
//!   by the loader and nothing else.

pub mod classify;
pub mod error;
pub mod loader;
pub mod types;

pub use classify::{is_daemon, AppValue};
pub use error::LoaderError;
pub use loader::from_app_path;
pub use types::{AppPath, Daemon};
