//! Server initialization
//!
//! Loads configuration, installs logging, wires the application and
//! launches Rocket.

use crate::admin::api::rocket_config;
use crate::admin::{AdminState, admin_rocket};
use docrepo_infrastructure::AppContext;
use docrepo_infrastructure::config::{AppConfig, ConfigLoader};
use docrepo_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Run the HTTP server until shutdown
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        store = %config.store.provider,
        "Starting docrepo server"
    );

    let launch_config = rocket_config(&config.server)?;
    let context = AppContext::build(config).await?;

    admin_rocket(AdminState::from_context(&context))
        .configure(launch_config)
        .launch()
        .await?;

    info!("docrepo server stopped");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
