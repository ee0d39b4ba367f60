//! Roster service - orchestrates person CRUD, batch upsert and statistics.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{BatchSummary, NewPerson, Person, Statistics};
use crate::ports::{CoreError, PersonRepository};
use crate::utils::validation::parse_batch_entry;

/// Service for roster operations.
///
/// Single-record operations delegate to the injected `PersonRepository`.
/// The batch path adds per-entry validation and outcome aggregation.
pub struct RosterService {
    repo: Arc<dyn PersonRepository>,
}

impl RosterService {
    /// Create a new roster service with the given repository.
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }

    /// List all people.
    pub async fn list(&self) -> Result<Vec<Person>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a person by ID.
    pub async fn get(&self, id: i64) -> Result<Person, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Add a new person with a store-assigned ID.
    pub async fn create(&self, person: NewPerson) -> Result<Person, CoreError> {
        let created = self.repo.insert(&person).await?;
        debug!(id = created.id, "Created person");
        Ok(created)
    }

    /// Overwrite an existing person.
    pub async fn update(&self, id: i64, person: NewPerson) -> Result<Person, CoreError> {
        let updated = self.repo.update(id, &person).await?;
        debug!(id, "Updated person");
        Ok(updated)
    }

    /// Delete a person by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        debug!(id, "Deleted person");
        Ok(())
    }

    /// Upsert a batch of people keyed by caller-supplied IDs.
    ///
    /// Only a body that is not a JSON array fails the whole call. Entries that
    /// fail validation are counted in `errors` and skipped. The valid entries
    /// are written in one transaction; if storage fails, nothing from this
    /// pass is kept and the failure is recorded as a single error entry.
    pub async fn batch_upsert(&self, body: &Value) -> Result<BatchSummary, CoreError> {
        let entries = body.as_array().ok_or_else(|| {
            CoreError::Validation("request body must be a JSON array".to_string())
        })?;

        let mut summary = BatchSummary::default();
        let mut valid = Vec::with_capacity(entries.len());
        for entry in entries {
            match parse_batch_entry(entry) {
                Ok(person) => valid.push(person),
                Err(detail) => summary.record_error(detail),
            }
        }

        if valid.is_empty() {
            return Ok(summary);
        }

        match self.repo.upsert_all(&valid).await {
            Ok(outcomes) => outcomes.into_iter().for_each(|o| summary.record(o)),
            Err(e) => {
                warn!(error = %e, entries = valid.len(), "Batch upsert rolled back");
                summary.record_error(e.to_string());
            }
        }

        debug!(
            updated = summary.updated,
            created = summary.created,
            errors = summary.errors,
            "Batch upsert finished"
        );
        Ok(summary)
    }

    /// Head counts per country and per city.
    pub async fn statistics(&self) -> Result<Statistics, CoreError> {
        let countries = self.repo.count_by_country().await?;
        let cities = self.repo.count_by_city().await?;
        Ok(Statistics::from_counts(countries, cities))
    }
}
