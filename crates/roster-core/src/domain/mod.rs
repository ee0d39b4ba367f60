//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `person` - Person types (`Person`, `NewPerson`, `Location`)
//! - `batch` - Batch upsert and aggregate results

mod batch;
mod person;

pub use batch::{BatchSummary, Statistics, UpsertOutcome};
pub use person::{Location, NewPerson, Person, seed_people};
