//! Main application configuration

use super::{AuthConfig, LoggingConfig, ServerConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,

    /// Document store
    pub store: StoreConfig,

    /// Password hashing and tokens
    pub auth: AuthConfig,

    /// Logging
    pub logging: LoggingConfig,
}
