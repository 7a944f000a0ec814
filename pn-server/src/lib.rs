pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    notes::{
        note_dto::NoteDto, note_list_response::NoteListResponse, notes::list_notes,
        notes_query::NotesQuery,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
