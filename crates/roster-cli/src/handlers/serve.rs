//! Serve command handler.
//!
//! Builds a `ServerConfig` from the CLI flags and runs the Axum server
//! until Ctrl-C.

use std::path::PathBuf;

use anyhow::Result;
use roster_axum::{CorsConfig, ServerConfig, start_server};
use roster_db::StoreConfig;

/// Flags of the `serve` subcommand.
#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub allow_origins: Vec<String>,
}

/// Execute the serve command.
pub async fn execute(store: StoreConfig, args: ServeArgs) -> Result<()> {
    let config = server_config(store, args);

    println!();
    println!("  roster server starting...");
    println!("  Database: {}", config.store.database_path().display());
    if let Some(ref dir) = config.static_dir {
        println!("  Serving UI from: {}", dir.display());
    }
    println!("  API: http://{}/api/classmates", config.bind_address());
    println!();
    println!("  Press Ctrl+C to stop the server");
    println!();

    start_server(config).await
}

fn server_config(store: StoreConfig, args: ServeArgs) -> ServerConfig {
    let cors = if args.allow_origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(args.allow_origins)
    };

    ServerConfig {
        host: args.host,
        port: args.port,
        store,
        static_dir: args.static_dir,
        cors,
    }
}
