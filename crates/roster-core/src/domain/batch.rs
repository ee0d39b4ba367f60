//! Batch upsert and aggregate result types.

use serde::Serialize;
use std::collections::BTreeMap;

/// What a single upsert did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No row had the ID; a new one was inserted with it.
    Created,
    /// A row with the ID existed and was overwritten.
    Updated,
}

/// Outcome report of one batch upsert pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub updated: usize,
    pub created: usize,
    pub errors: usize,
    pub error_details: Vec<String>,
}

impl BatchSummary {
    /// Count a successful upsert.
    pub const fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Updated => self.updated += 1,
        }
    }

    /// Count a failed entry and keep its message.
    pub fn record_error(&mut self, detail: impl Into<String>) {
        self.errors += 1;
        self.error_details.push(detail.into());
    }

    /// Number of entries that reached the store.
    pub const fn applied(&self) -> usize {
        self.updated + self.created
    }
}

/// Per-country and per-city head counts.
///
/// `total` is the sum of the country counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub country_stats: BTreeMap<String, i64>,
    pub city_stats: BTreeMap<String, i64>,
    pub total: i64,
}

impl Statistics {
    pub fn from_counts(
        country_stats: BTreeMap<String, i64>,
        city_stats: BTreeMap<String, i64>,
    ) -> Self {
        let total = country_stats.values().sum();
        Self {
            country_stats,
            city_stats,
            total,
        }
    }
}
