use serde::Deserialize;

/// Query parameters for the notes endpoint
#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    pub username: String,
    pub pin: String,
}
