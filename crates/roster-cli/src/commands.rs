//! Subcommands of the roster CLI.

use std::path::PathBuf;

use clap::Subcommand;
use roster_axum::DEFAULT_PORT;

/// Available roster commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "ROSTER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Directory of built frontend assets to serve next to the API
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Restrict CORS to these origins (repeatable); any origin when omitted
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Create the database and seed it if it does not exist yet
    Init,

    /// Print every classmate
    List,

    /// Print classmate counts per country and city
    Stats,

    /// Upsert classmates from a JSON file holding an array of records
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}
