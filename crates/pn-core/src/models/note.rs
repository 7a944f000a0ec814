use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `notes` table. The id is assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
