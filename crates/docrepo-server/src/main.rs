//! docrepo Server
//!
//! Admin signup and login over HTTP, backed by a generic document store.

use clap::Parser;
use docrepo_server::run_server;

/// Command line interface for docrepo
#[derive(Parser, Debug)]
#[command(name = "docrepo")]
#[command(about = "docrepo - document repository with admin authentication")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_server(cli.config.as_deref()).await
}
