use pn_core::Note;

use serde::Serialize;

/// Note DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct NoteDto {
    pub id: i64,
    pub content: String,
    pub username: String,
    pub created_at: i64,
}

impl From<Note> for NoteDto {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            content: n.content,
            username: n.username,
            created_at: n.created_at.timestamp(),
        }
    }
}
