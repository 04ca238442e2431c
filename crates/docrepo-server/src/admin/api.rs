//! Rocket runtime configuration

use docrepo_domain::error::{Error, Result};
use docrepo_infrastructure::config::ServerConfig;
use rocket::config::{Config as RocketConfig, LogLevel};
use std::net::IpAddr;

/// Rocket configuration for the configured bind address
pub fn rocket_config(server: &ServerConfig) -> Result<RocketConfig> {
    let address: IpAddr = server.host.parse().map_err(|e| {
        Error::configuration(format!("Invalid server host '{}': {e}", server.host))
    })?;
    Ok(RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Critical,
        ..RocketConfig::default()
    })
}
