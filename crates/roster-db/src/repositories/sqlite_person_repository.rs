//! `SQLite` implementation of the `PersonRepository` trait.

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnection;
use sqlx::{ConnectOptions, Connection, Row};
use std::collections::BTreeMap;
use tracing::debug;

use roster_core::{NewPerson, Person, PersonRepository, RepositoryError, UpsertOutcome};

use super::row_mappers::{PERSON_SELECT_COLUMNS, row_to_person, storage_error};
use crate::setup::StoreConfig;

/// `SQLite` implementation of the `PersonRepository` trait.
///
/// Holds no connection. Each operation opens one from the `StoreConfig`,
/// runs its statements and closes it before returning.
pub struct SqlitePersonRepository {
    config: StoreConfig,
}

impl SqlitePersonRepository {
    /// Create a new `SQLite` person repository.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn connect(&self) -> Result<SqliteConnection, RepositoryError> {
        self.config
            .connect_options()
            .connect()
            .await
            .map_err(storage_error)
    }

    async fn count_grouped(
        &self,
        column: &'static str,
    ) -> Result<BTreeMap<String, i64>, RepositoryError> {
        let mut conn = self.connect().await?;
        let query = format!("SELECT {column} AS grp, COUNT(*) AS n FROM classmates GROUP BY {column}");

        let rows = sqlx::query(&query)
            .fetch_all(&mut conn)
            .await
            .map_err(storage_error)?;
        conn.close().await.map_err(storage_error)?;

        rows.iter()
            .map(|row| -> Result<(String, i64), RepositoryError> {
                Ok((
                    row.try_get::<String, _>("grp").map_err(storage_error)?,
                    row.try_get::<i64, _>("n").map_err(storage_error)?,
                ))
            })
            .collect()
    }
}

async fn fetch_person(conn: &mut SqliteConnection, id: i64) -> Result<Person, RepositoryError> {
    let query = format!("SELECT {PERSON_SELECT_COLUMNS} FROM classmates WHERE id = ?");

    let row = sqlx::query(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| RepositoryError::NotFound(format!("Person with ID {id}")))?;

    row_to_person(&row)
}

/// Upsert one person on an open connection or transaction.
async fn upsert_on(
    conn: &mut SqliteConnection,
    person: &Person,
) -> Result<UpsertOutcome, RepositoryError> {
    let exists = sqlx::query("SELECT id FROM classmates WHERE id = ?")
        .bind(person.id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)?
        .is_some();

    if exists {
        sqlx::query(
            "UPDATE classmates SET name = ?, city = ?, country = ?, lat = ?, lng = ? WHERE id = ?",
        )
        .bind(&person.name)
        .bind(&person.city)
        .bind(&person.country)
        .bind(person.location.lat)
        .bind(person.location.lng)
        .bind(person.id)
        .execute(&mut *conn)
        .await
        .map_err(storage_error)?;
        Ok(UpsertOutcome::Updated)
    } else {
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
        .await
        .map_err(storage_error)?;
        Ok(UpsertOutcome::Created)
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn list(&self) -> Result<Vec<Person>, RepositoryError> {
        let mut conn = self.connect().await?;
        let query = format!("SELECT {PERSON_SELECT_COLUMNS} FROM classmates ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&mut conn)
            .await
            .map_err(storage_error)?;
        conn.close().await.map_err(storage_error)?;

        rows.iter().map(row_to_person).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Person, RepositoryError> {
        let mut conn = self.connect().await?;
        let person = fetch_person(&mut conn, id).await?;
        conn.close().await.map_err(storage_error)?;
        Ok(person)
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            "INSERT INTO classmates (name, city, country, lat, lng) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&person.name)
        .bind(&person.city)
        .bind(&person.country)
        .bind(person.location.lat)
        .bind(person.location.lng)
        .execute(&mut conn)
        .await
        .map_err(storage_error)?;

        let created = fetch_person(&mut conn, result.last_insert_rowid()).await?;
        conn.close().await.map_err(storage_error)?;
        Ok(created)
    }

    async fn update(&self, id: i64, person: &NewPerson) -> Result<Person, RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            "UPDATE classmates SET name = ?, city = ?, country = ?, lat = ?, lng = ? WHERE id = ?",
        )
        .bind(&person.name)
        .bind(&person.city)
        .bind(&person.country)
        .bind(person.location.lat)
        .bind(person.location.lng)
        .bind(id)
        .execute(&mut conn)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Person with ID {id}")));
        }

        let updated = fetch_person(&mut conn, id).await?;
        conn.close().await.map_err(storage_error)?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("DELETE FROM classmates WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(storage_error)?;
        conn.close().await.map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Person with ID {id}")));
        }

        Ok(())
    }

    async fn upsert(&self, person: &Person) -> Result<UpsertOutcome, RepositoryError> {
        let mut conn = self.connect().await?;
        let outcome = upsert_on(&mut conn, person).await?;
        conn.close().await.map_err(storage_error)?;
        Ok(outcome)
    }

    async fn upsert_all(&self, people: &[Person]) -> Result<Vec<UpsertOutcome>, RepositoryError> {
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await.map_err(storage_error)?;

        let mut outcomes = Vec::with_capacity(people.len());
        for person in people {
            // Dropping `tx` on the error path rolls the whole pass back
            outcomes.push(upsert_on(&mut tx, person).await?);
        }

        tx.commit().await.map_err(storage_error)?;
        conn.close().await.map_err(storage_error)?;

        debug!(rows = outcomes.len(), "Committed batch upsert");
        Ok(outcomes)
    }

    async fn count_by_country(&self) -> Result<BTreeMap<String, i64>, RepositoryError> {
        self.count_grouped("country").await
    }

    async fn count_by_city(&self) -> Result<BTreeMap<String, i64>, RepositoryError> {
        self.count_grouped("city").await
    }
}
