//! Init command handler.

use anyhow::Result;
use roster_db::{StoreConfig, initialize};

/// Create and seed the database file unless it already exists.
///
/// Returns `true` when a new store was created.
pub async fn execute(store: &StoreConfig) -> Result<bool> {
    let created = initialize(store).await?;
    let path = store.database_path().display();

    if created {
        println!("Created roster database at {path}");
    } else {
        println!("Roster database already exists at {path}");
    }
    Ok(created)
}
