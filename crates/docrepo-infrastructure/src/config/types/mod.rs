//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod store;

pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, PasswordAlgorithm, PasswordConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use store::{StoreConfig, StoreProviderKind};
