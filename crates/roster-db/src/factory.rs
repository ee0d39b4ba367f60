//! Composition utilities for building `RosterService` with a `SQLite` backend.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use std::sync::Arc;

use roster_core::RosterService;

use crate::repositories::SqlitePersonRepository;
use crate::setup::StoreConfig;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a person repository for the configured store.
    pub fn person_repository(config: StoreConfig) -> Arc<SqlitePersonRepository> {
        Arc::new(SqlitePersonRepository::new(config))
    }

    /// Build a `RosterService` backed by the configured store.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a fully composed service. The store must already be initialized.
    ///
    /// ```ignore
    /// let config = StoreConfig::new("classmates.db");
    /// initialize(&config).await?;
    /// let roster = CoreFactory::build_service(config);
    /// ```
    pub fn build_service(config: StoreConfig) -> RosterService {
        RosterService::new(Self::person_repository(config))
    }
}

/// Test database helper for integration tests.
///
/// Provides a seeded store in a temporary directory that is removed when
/// the helper is dropped.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    _dir: tempfile::TempDir,
    config: StoreConfig,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create and seed a fresh store in a new temp directory.
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::TempDir::new()?;
        let config = StoreConfig::new(dir.path().join(crate::setup::DEFAULT_DATABASE_FILE));
        crate::setup::initialize(&config).await?;
        Ok(Self { _dir: dir, config })
    }

    /// The config pointing at this test database.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Create a person repository using this test database.
    pub fn person_repository(&self) -> SqlitePersonRepository {
        SqlitePersonRepository::new(self.config.clone())
    }

    /// Create a roster service using this test database.
    pub fn service(&self) -> RosterService {
        CoreFactory::build_service(self.config.clone())
    }
}
