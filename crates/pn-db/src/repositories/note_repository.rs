use crate::Result as DbErrorResult;

use pn_core::Note;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All notes of a user, in natural row order.
    ///
    /// A row that fails to decode is skipped rather than failing the whole
    /// fetch; the caller gets the decodable subset.
    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Vec<Note>> {
        let rows =
            sqlx::query("SELECT id, content, username, created_at FROM notes WHERE username = ?")
                .bind(username)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .iter()
            .filter_map(|row| match Self::decode_row(row) {
                Ok(note) => Some(note),
                Err(e) => {
                    log::warn!("Skipping undecodable note row for {}: {}", username, e);
                    None
                }
            })
            .collect())
    }

    fn decode_row(row: &SqliteRow) -> Result<Note, sqlx::Error> {
        let timestamp: i64 = row.try_get("created_at")?;
        let created_at =
            DateTime::from_timestamp(timestamp, 0).ok_or_else(|| sqlx::Error::ColumnDecode {
                index: "created_at".into(),
                source: format!("timestamp {} out of range", timestamp).into(),
            })?;

        Ok(Note {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            username: row.try_get("username")?,
            created_at,
        })
    }
}
