pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::note::Note;
pub use models::user::User;
pub use validation::{validate_pin, validate_username};
