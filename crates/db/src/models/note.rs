//! Note entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use jot_core::types::Timestamp;

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// External-facing note representation. Owner id is an internal storage
/// field (all responses are already scoped to the caller) and is not
/// serialized.
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
        }
    }
}

/// DTO for creating a new note. Doubles as the request schema for
/// `POST /notes`; unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

/// DTO for updating a note. Both fields are required: an update overwrites
/// title and content and leaves everything else (including `created_at`)
/// untouched.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateNote {
    pub title: String,
    pub content: String,
}
