use core::fmt;

use chrono::naive::NaiveDateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Note {
    /// Has the title or body changed since creation?
    pub fn is_modified(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// The fields of a note that can be changed after creation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteField {
    /// Title of the note
    Title,

    /// Text of the note
    Body,
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoteField::Title => write!(f, "title"),
            NoteField::Body => write!(f, "text"),
        }
    }
}

/// Identifier of a note as given on the command line
///
/// Only positive integers are valid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteId(i32);

impl NoteId {
    /// Parse a raw command line argument
    ///
    /// Returns `None` for anything that is not a positive integer
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
