//! Memory storage
//!
//! Will be destroyed on process exit

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::notes::Note;
use crate::notes::NoteField;

use super::Error;
use super::Result;
use super::Storage;

/// Notes and the last handed out ID
#[derive(Debug, Default)]
struct State {
    /// All notes in storage
    notes: HashMap<i32, Note>,

    /// Last ID given to a note, IDs are never reused
    last_id: i32,
}

/// An in-memory storage
///
/// Will be destroyed on process exit
#[derive(Clone, Debug, Default)]
pub struct Memory {
    state: Arc<Mutex<State>>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for Memory {
    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, title: &str, body: &str) -> Result<i32> {
        let mut state = self.state.lock().await;

        state.last_id += 1;

        let now = Utc::now().naive_utc();
        let note = Note {
            id: state.last_id,
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        };

        state.notes.insert(note.id, note);

        Ok(state.last_id)
    }

    async fn fetch_all(&self) -> Result<Vec<Note>> {
        let mut notes = self
            .state
            .lock()
            .await
            .notes
            .values()
            .cloned()
            .collect::<Vec<Note>>();

        notes.sort_by_key(|note| (note.created_at, note.id));

        Ok(notes)
    }

    async fn fetch_one(&self, id: i32) -> Result<Note> {
        self.state
            .lock()
            .await
            .notes
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.lock().await.notes.contains_key(&id))
    }

    async fn update_field(&self, id: i32, field: NoteField, value: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        let note = state.notes.get_mut(&id).ok_or(Error::NotFound(id))?;

        match field {
            NoteField::Title => note.title = value.to_string(),
            NoteField::Body => note.body = value.to_string(),
        }

        // updated_at never goes before created_at, even when the clock does
        note.updated_at = Utc::now().naive_utc().max(note.created_at);

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.state.lock().await.notes.remove(&id);

        Ok(())
    }
}
