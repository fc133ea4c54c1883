//! Use cases on top of the storage
//!
//! Every operation on an existing note validates the raw ID and checks the note exists before
//! anything is written

use crate::error::Error;
use crate::error::Result;
use crate::input::InputSource;
use crate::notes::Note;
use crate::notes::NoteField;
use crate::notes::NoteId;
use crate::storage;
use crate::storage::Storage;

/// Outcome of updating a single field
#[derive(Debug)]
pub enum FieldUpdate {
    /// Empty answer, nothing was written
    Skipped,

    /// The new value is stored
    Updated,

    /// Storing the new value failed
    Failed(storage::Error),

    /// The new value could not be read, nothing was written
    Unanswered(std::io::Error),
}

impl FieldUpdate {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of updating a note, field by field
#[derive(Debug)]
pub struct UpdateReport {
    pub title: FieldUpdate,
    pub body: FieldUpdate,
}

impl UpdateReport {
    /// Outcomes in the order the fields are asked for
    pub fn fields(&self) -> [(NoteField, &FieldUpdate); 2] {
        [(NoteField::Title, &self.title), (NoteField::Body, &self.body)]
    }

    pub fn has_failures(&self) -> bool {
        self.title.is_failed() || self.body.is_failed()
    }
}

/// Note operations for a single user
pub struct NoteService<S> {
    storage: S,
}

impl<S: Storage> NoteService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Ask for a title and text and create a note from them
    ///
    /// Empty answers are stored as-is
    pub async fn add<I: InputSource>(&self, input: &mut I) -> Result<i32> {
        let title = input.ask("Enter the note title:")?;
        let body = input.ask("Enter the note text:")?;

        if title.is_empty() {
            tracing::debug!("Creating note without a title");
        }

        let id = self.storage.insert(&title, &body).await?;

        Ok(id)
    }

    /// Find a single existing note
    pub async fn get(&self, raw_id: Option<&str>) -> Result<Note> {
        let id = self.existing_note_id(raw_id).await?;

        let note = self
            .storage
            .fetch_one(id.get())
            .await
            .map_err(not_found_or_storage)?;

        Ok(note)
    }

    /// All notes, oldest first
    pub async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.storage.fetch_all().await?)
    }

    /// Ask for a new title and text, empty answers leave the field as it is
    ///
    /// Fields are updated independently, a failing title update does not stop the text update.
    /// Failing to read the text after the title is handled is reported as `Unanswered`
    pub async fn update<I: InputSource>(
        &self,
        raw_id: Option<&str>,
        input: &mut I,
    ) -> Result<UpdateReport> {
        let id = self.existing_note_id(raw_id).await?;

        let title = input.ask("Enter a new note title (press Enter to skip):")?;
        let title = self.update_field(id, NoteField::Title, &title).await;

        let body = match input.ask("Enter a new note text (press Enter to skip):") {
            Ok(body) => self.update_field(id, NoteField::Body, &body).await,
            Err(err) => FieldUpdate::Unanswered(err),
        };

        Ok(UpdateReport { title, body })
    }

    /// Delete a single existing note
    pub async fn remove(&self, raw_id: Option<&str>) -> Result<NoteId> {
        let id = self.existing_note_id(raw_id).await?;

        self.storage.delete(id.get()).await?;

        Ok(id)
    }

    /// Validate the raw ID and make sure a note with it exists
    async fn existing_note_id(&self, raw_id: Option<&str>) -> Result<NoteId> {
        let id = parse_note_id(raw_id)?;

        if !self.storage.exists(id.get()).await? {
            return Err(Error::NotFound(id.get()));
        }

        Ok(id)
    }

    async fn update_field(&self, id: NoteId, field: NoteField, value: &str) -> FieldUpdate {
        if value.is_empty() {
            return FieldUpdate::Skipped;
        }

        match self.storage.update_field(id.get(), field, value).await {
            Ok(()) => FieldUpdate::Updated,
            Err(err) => {
                tracing::warn!("Could not update {field} of note {id}: {err}");
                FieldUpdate::Failed(err)
            }
        }
    }
}

/// Parse the raw ID from the command line
fn parse_note_id(raw_id: Option<&str>) -> Result<NoteId> {
    let raw_id = raw_id.ok_or_else(|| Error::Usage("Missing note ID".to_string()))?;

    NoteId::parse(raw_id).ok_or_else(|| {
        Error::Usage(format!(
            "Invalid note ID `{raw_id}`, expected a positive number"
        ))
    })
}

/// Keep a missing note apart from other storage errors
fn not_found_or_storage(err: storage::Error) -> Error {
    match err {
        storage::Error::NotFound(id) => Error::NotFound(id),
        err => Error::Storage(err),
    }
}
