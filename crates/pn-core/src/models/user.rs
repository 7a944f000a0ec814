use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `users` table.
///
/// `encrypted_pin` is the ciphertext produced by the PIN cipher, never the
/// plaintext PIN. A user is created on first PIN submission for a username
/// and never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub encrypted_pin: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, encrypted_pin: String) -> Self {
        Self {
            username,
            encrypted_pin,
            created_at: Utc::now(),
        }
    }
}
