//! Postgres storage

use std::time::Duration;

use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::notes::Note;
use crate::notes::NoteField;

use super::Error;
use super::Result;
use super::Storage;

/// Migrator to create the schema on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres storage
#[derive(Clone)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Connect to the database behind the connection string
    ///
    /// Only a single connection is used, one invocation is one unit of work
    pub async fn connect(database_url: &str) -> Result<Self> {
        let connection_pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
            .map_err(connection_error)?;

        Ok(Self::from_pool(connection_pool))
    }

    /// Create Postgres storage with existing pool
    ///
    /// The schema is not touched, call `init_schema` for that
    pub fn from_pool(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl Storage for Postgres {
    async fn init_schema(&self) -> Result<()> {
        MIGRATOR
            .run(&self.connection_pool)
            .await
            .map_err(|err| Error::Schema(err.to_string()))
    }

    async fn insert(&self, title: &str, body: &str) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO notes (title, body)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(title)
        .bind(body)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        tracing::debug!("Inserted note {id}");

        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            r"
            SELECT id, title, body, created_at, updated_at
            FROM notes
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let notes = rows
            .iter()
            .filter_map(|row| match Note::from_row(row) {
                Ok(note) => Some(note),
                Err(err) => {
                    tracing::warn!("Skipping note that could not be read: {err}");
                    None
                }
            })
            .collect::<Vec<Note>>();

        tracing::debug!("Fetched {} of {} notes", notes.len(), rows.len());

        Ok(notes)
    }

    async fn fetch_one(&self, id: i32) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r"
            SELECT id, title, body, created_at, updated_at
            FROM notes
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        note.ok_or(Error::NotFound(id))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM notes
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(count == 1)
    }

    async fn update_field(&self, id: i32, field: NoteField, value: &str) -> Result<()> {
        let query = match field {
            NoteField::Title => {
                r"
                UPDATE notes
                SET title = $1, updated_at = (now() AT TIME ZONE 'utc')
                WHERE id = $2
                "
            }
            NoteField::Body => {
                r"
                UPDATE notes
                SET body = $1, updated_at = (now() AT TIME ZONE 'utc')
                WHERE id = $2
                "
            }
        };

        let result = sqlx::query(query)
            .bind(value)
            .bind(id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }

        tracing::debug!("Updated {field} of note {id}");

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query(
            r"
            DELETE FROM notes
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        tracing::debug!("Deleted note {id}");

        Ok(())
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
