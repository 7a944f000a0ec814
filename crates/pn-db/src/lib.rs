pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::note_repository::NoteRepository;
pub use repositories::user_repository::UserRepository;
