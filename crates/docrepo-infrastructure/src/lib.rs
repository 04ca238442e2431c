//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (TOML + `DOCREPO__*` env) |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context conversions into the domain error |
//! | [`factory`] | Provider construction from configuration |
//! | [`bootstrap`] | `AppContext`, the wired application |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use bootstrap::AppContext;
pub use error_ext::ErrorContext;
