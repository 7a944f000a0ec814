#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row directly, bypassing the repository
pub async fn insert_user(pool: &SqlitePool, username: &str, pin_ciphertext: &str) {
    sqlx::query("INSERT INTO users (username, pin, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(pin_ciphertext)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to insert user");
}

/// Inserts a note row directly, bypassing the repository
pub async fn insert_note(pool: &SqlitePool, username: &str, content: &str) -> i64 {
    let result = sqlx::query("INSERT INTO notes (content, username, created_at) VALUES (?, ?, ?)")
        .bind(content)
        .bind(username)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to insert note");

    result.last_insert_rowid()
}

/// Inserts a note row with an explicit created_at value
pub async fn insert_note_with_timestamp(
    pool: &SqlitePool,
    username: &str,
    content: &str,
    created_at: i64,
) {
    sqlx::query("INSERT INTO notes (content, username, created_at) VALUES (?, ?, ?)")
        .bind(content)
        .bind(username)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert note");
}

/// Inserts a user row with an explicit created_at value
pub async fn insert_user_with_timestamp(
    pool: &SqlitePool,
    username: &str,
    pin_ciphertext: &str,
    created_at: i64,
) {
    sqlx::query("INSERT INTO users (username, pin, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(pin_ciphertext)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert user");
}

/// Inserts a note row with NULL content, which the repository cannot decode
pub async fn insert_malformed_note(pool: &SqlitePool, username: &str) {
    sqlx::query("INSERT INTO notes (content, username, created_at) VALUES (NULL, ?, ?)")
        .bind(username)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to insert malformed note");
}
