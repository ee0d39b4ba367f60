//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! Connections are confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_person_repository;

pub use sqlite_person_repository::SqlitePersonRepository;
