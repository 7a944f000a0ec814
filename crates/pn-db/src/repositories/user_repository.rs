use crate::Result as DbErrorResult;

use pn_core::User;

use chrono::DateTime;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT username, pin, created_at FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => {
                let timestamp: i64 = r.try_get("created_at")?;
                let created_at = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
                    sqlx::Error::ColumnDecode {
                        index: "created_at".into(),
                        source: format!("timestamp {} out of range", timestamp).into(),
                    }
                })?;

                Ok(Some(User {
                    username: r.try_get("username")?,
                    encrypted_pin: r.try_get("pin")?,
                    created_at,
                }))
            }
            None => Ok(None),
        }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let created_at = user.created_at.timestamp();

        sqlx::query("INSERT INTO users (username, pin, created_at) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.encrypted_pin)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
