pub mod error;
pub mod notes;
