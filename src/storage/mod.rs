//! All things related to the storage of notes

use async_trait::async_trait;
use thiserror::Error;

use crate::notes::Note;
use crate::notes::NoteField;

#[cfg(any(test, not(feature = "postgres")))]
pub use memory::Memory;
#[cfg(feature = "postgres")]
pub use postgres::Postgres;

#[cfg(any(test, not(feature = "postgres")))]
mod memory;
#[cfg(feature = "postgres")]
mod postgres;

/// Setup the storage
///
/// Without Postgres support the notes only live as long as the process
#[cfg(not(feature = "postgres"))]
pub async fn setup(_database_url: &str) -> Result<Memory> {
    tracing::warn!("Postgres support is disabled, notes will not be persisted");

    let storage = Memory::new();
    storage.init_schema().await?;

    Ok(storage)
}

/// Setup the storage
///
/// Connects to the database and makes sure the schema exists
#[cfg(feature = "postgres")]
pub async fn setup(database_url: &str) -> Result<Postgres> {
    let storage = Postgres::connect(database_url).await?;
    storage.init_schema().await?;

    Ok(storage)
}

/// Storage errors
#[derive(Debug, Error)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),

    /// No note exists with the given ID
    #[error("Note {0} not found")]
    NotFound(i32),

    /// The schema could not be established
    #[error("Schema error: {0}")]
    Schema(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Storage with all supported operations
#[async_trait]
pub trait Storage: Send + Sync {
    /// Make sure the notes table exists
    ///
    /// Safe to call on every startup
    async fn init_schema(&self) -> Result<()>;

    /// Create a note, both timestamps are set to now
    ///
    /// Returns the ID assigned by the storage
    async fn insert(&self, title: &str, body: &str) -> Result<i32>;

    /// Find all notes, oldest first
    ///
    /// Notes that cannot be read are skipped
    async fn fetch_all(&self) -> Result<Vec<Note>>;

    /// Find a single note by its ID
    async fn fetch_one(&self, id: i32) -> Result<Note>;

    /// Is there exactly one note with this ID?
    async fn exists(&self, id: i32) -> Result<bool>;

    /// Change a single field of a note and mark it as updated
    async fn update_field(&self, id: i32, field: NoteField, value: &str) -> Result<()>;

    /// Delete a note, there is no way back
    async fn delete(&self, id: i32) -> Result<()>;
}
