//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the classmates roster.
///
/// Global options apply to every subcommand.
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keep a roster of classmates and where they live")]
#[command(version)]
pub struct Cli {
    /// Path of the SQLite database file
    #[arg(long = "db-path", env = "ROSTER_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
