//! Admin HTTP API
//!
//! Signup and login over JSON, mounted at `/admin`.

pub mod api;
pub mod auth;
pub mod catchers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::AdminState;
pub use routes::{admin_rocket, admin_routes};
