//! Database setup and initialization.
//!
//! This module provides [`StoreConfig`], the explicit location of the
//! `SQLite` file, and [`initialize`], which creates and seeds the store the
//! first time it runs. Entry points call this with the configured path.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use roster_core::{Person, seed_people};

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "classmates.db";

/// Where the roster store lives.
///
/// Every repository operation opens its own connection from this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl StoreConfig {
    /// Create a config for the given database file.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// `classmates.db` in the current working directory.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_DATABASE_FILE)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Connect options for an existing database file.
    pub(crate) fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new().filename(&self.database_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Creates and seeds the store if its file does not exist yet.
///
/// This function:
/// 1. Returns immediately if the database file is already present
/// 2. Creates the parent directory and the database file
/// 3. Creates the `classmates` table
/// 4. Inserts the seed rows
///
/// Existence is decided by the file alone; an existing file is never
/// inspected or modified.
///
/// # Returns
///
/// `true` if the store was created and seeded, `false` if it already existed.
///
/// # Example
///
/// ```rust,no_run
/// use roster_db::{StoreConfig, initialize};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = StoreConfig::new("/path/to/classmates.db");
/// let seeded = initialize(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn initialize(config: &StoreConfig) -> Result<bool> {
    initialize_with(config, &seed_people()).await
}

async fn initialize_with(config: &StoreConfig, seeds: &[Person]) -> Result<bool> {
    let db_path = config.database_path();
    if db_path.exists() {
        debug!(database_path = %db_path.display(), "Store already initialized");
        return Ok(false);
    }

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    if let Err(e) = create_store(config, seeds).await {
        // A half-created file would otherwise count as an initialized store
        if db_path.exists() {
            if let Err(remove_err) = std::fs::remove_file(db_path) {
                warn!(
                    database_path = %db_path.display(),
                    error = %remove_err,
                    "Failed to remove partially created store"
                );
            }
        }
        return Err(e);
    }

    info!(database_path = %db_path.display(), "Created roster store with seed rows");
    Ok(true)
}

/// Creates the database file, schema and `seeds` in one transaction.
async fn create_store(config: &StoreConfig, seeds: &[Person]) -> Result<()> {
    let mut conn = config
        .connect_options()
        .create_if_missing(true)
        .connect()
        .await?;

    let mut tx = conn.begin().await?;
    create_schema(&mut tx).await?;
    insert_seed_rows(&mut tx, seeds).await?;
    tx.commit().await?;
    conn.close().await?;
    Ok(())
}

/// Creates the `classmates` table.
async fn create_schema(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classmates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            country TEXT NOT NULL,
            lat REAL NOT NULL,
            lng REAL NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    // Index on country and city for the grouped counts
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_classmates_country ON classmates(country)")
        .execute(&mut *conn)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_classmates_city ON classmates(city)")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

async fn insert_seed_rows(conn: &mut SqliteConnection, seeds: &[Person]) -> Result<()> {
    for person in seeds {
        sqlx::query(
            "INSERT INTO classmates (id, name, city, country, lat, lng) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(person.id)
        .bind(&person.name)
        .bind(&person.city)
        .bind(&person.country)
        .bind(person.location.lat)
        .bind(person.location.lng)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialize_creates_file_once() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("nested").join("roster.db"));

        assert!(initialize(&config).await.unwrap());
        assert!(config.database_path().exists());
        assert!(!initialize(&config).await.unwrap());
    }

    #[tokio::test]
    async fn test_existing_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.db");
        std::fs::write(&path, b"").unwrap();

        let config = StoreConfig::new(&path);
        assert!(!initialize(&config).await.unwrap());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_failed_setup_leaves_no_file_behind() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("roster.db"));

        // Same primary key twice makes the seed transaction fail
        let mut seeds = seed_people();
        seeds.push(seeds[0].clone());

        assert!(initialize_with(&config, &seeds).await.is_err());
        assert!(!config.database_path().exists());

        assert!(initialize(&config).await.unwrap());
        assert!(!initialize(&config).await.unwrap());
    }

    #[test]
    fn test_default_path_is_relative_classmates_db() {
        let config = StoreConfig::default();
        assert_eq!(config.database_path(), Path::new(DEFAULT_DATABASE_FILE));
    }
}
