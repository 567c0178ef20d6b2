//! Blomso site service
//!
//! Starts the HTTP server for lead capture and content views.

use blomso_server::{config::ServerConfig, start_server, ServerError};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Blomso site service - lead capture and content API
#[derive(Debug, Parser)]
#[command(name = "blomso-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Load configuration from a TOML file
    #[arg(short, long, env = "BLOMSO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the catalog file from the configuration
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override the bind port from the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => {
            eprintln!("Warning: No config file specified, using defaults");
            ServerConfig::default()
        }
    };

    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    start_server(config).await
}
