//! Core domain, ports and services for the roster service.
//!
//! - [`domain`] - `Person`, `NewPerson`, `Location` and batch/statistics results
//! - [`ports`] - `PersonRepository` and the error taxonomy
//! - [`services`] - `RosterService`, the facade adapters talk to
//! - [`utils::validation`] - presence checks for raw JSON payloads
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    BatchSummary, Location, NewPerson, Person, Statistics, UpsertOutcome, seed_people,
};
pub use ports::{CoreError, PersonRepository, RepositoryError};
pub use services::RosterService;
