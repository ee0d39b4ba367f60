//! Person repository trait definition.
//!
//! This port defines the interface for roster persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::RepositoryError;
use crate::domain::{NewPerson, Person, UpsertOutcome};

/// Repository for person persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD plus keyed upsert and grouped counts
/// - Payload validation belongs in the core, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List every person in storage order.
    async fn list(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Get a person by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no row has that ID.
    async fn get_by_id(&self, id: i64) -> Result<Person, RepositoryError>;

    /// Insert a person, letting the store assign the ID.
    async fn insert(&self, person: &NewPerson) -> Result<Person, RepositoryError>;

    /// Overwrite all fields of an existing person.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no row has that ID.
    async fn update(&self, id: i64, person: &NewPerson) -> Result<Person, RepositoryError>;

    /// Delete a person by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no row has that ID.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Insert or overwrite a person keyed by its caller-supplied ID.
    async fn upsert(&self, person: &Person) -> Result<UpsertOutcome, RepositoryError>;

    /// Upsert every person inside a single transaction.
    ///
    /// Outcomes are returned in input order. On error nothing is persisted.
    async fn upsert_all(&self, people: &[Person]) -> Result<Vec<UpsertOutcome>, RepositoryError>;

    /// Head count per distinct country.
    async fn count_by_country(&self) -> Result<BTreeMap<String, i64>, RepositoryError>;

    /// Head count per distinct city.
    async fn count_by_city(&self) -> Result<BTreeMap<String, i64>, RepositoryError>;
}
