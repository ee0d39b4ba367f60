//! Row mapping helpers for `SQLite` queries.

use roster_core::{Location, Person, RepositoryError};
use sqlx::Row;
use sqlx::error::ErrorKind;

/// Shared SELECT column list for person queries.
pub const PERSON_SELECT_COLUMNS: &str = "id, name, city, country, lat, lng";

/// Parse a database row into a Person.
///
/// Every query that returns people goes through here, so the nested
/// `location` shape is built in exactly one place.
pub fn row_to_person(row: &sqlx::sqlite::SqliteRow) -> Result<Person, RepositoryError> {
    Ok(Person {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        city: row.try_get("city").map_err(storage_error)?,
        country: row.try_get("country").map_err(storage_error)?,
        location: Location {
            lat: row.try_get("lat").map_err(storage_error)?,
            lng: row.try_get("lng").map_err(storage_error)?,
        },
    })
}

/// Map a sqlx error onto the repository taxonomy.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    let kind = err.as_database_error().map(|db| db.kind());
    match kind {
        Some(
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation,
        ) => RepositoryError::Constraint(err.to_string()),
        _ => RepositoryError::Storage(err.to_string()),
    }
}
