pub mod note_dto;
pub mod note_list_response;
pub mod notes;
pub mod notes_query;
