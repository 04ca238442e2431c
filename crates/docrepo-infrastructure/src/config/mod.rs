//! Configuration
//!
//! Layered loading (defaults, TOML file, `DOCREPO__*` environment) with
//! validation.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::*;
