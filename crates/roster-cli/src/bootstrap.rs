//! CLI bootstrap - the composition root.
//!
//! Resolves the store location, makes sure it is initialized and builds
//! the `RosterService` the command handlers talk to.

use std::path::PathBuf;

use anyhow::Result;
use roster_core::RosterService;
use roster_db::{CoreFactory, StoreConfig, initialize};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the roster store lives.
    pub store: StoreConfig,
}

impl CliConfig {
    /// Use `db_path` when given, otherwise the default database file.
    pub fn from_db_path(db_path: Option<PathBuf>) -> Self {
        let store = db_path.map_or_else(StoreConfig::with_defaults, StoreConfig::new);
        Self { store }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The roster facade.
    pub roster: RosterService,
    /// The store the service was built on.
    pub store: StoreConfig,
}

/// Initialize the store if needed and compose the context.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        database_path = %config.store.database_path().display(),
        "CLI bootstrap resolved paths"
    );

    initialize(&config.store).await?;

    Ok(CliContext {
        roster: CoreFactory::build_service(config.store.clone()),
        store: config.store,
    })
}
