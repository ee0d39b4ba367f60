//! `SQLite` persistence for the roster.
//!
//! - [`setup`] - `StoreConfig` and first-run initialization with seed rows
//! - [`repositories`] - `SqlitePersonRepository`, the `PersonRepository` adapter
//! - [`factory`] - composition helpers for adapters and tests
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqlitePersonRepository;

// Re-export setup items for convenient access
pub use setup::{DEFAULT_DATABASE_FILE, StoreConfig, initialize};

// Bundled SQLite is linked through this crate's features only
use libsqlite3_sys as _;
