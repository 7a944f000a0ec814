#![allow(dead_code)]

//! Test infrastructure for pn-server API tests

use pn_crypto::PinCipher;
use pn_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &str = "test-secret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/pn-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        cipher: Arc::new(PinCipher::from_secret(TEST_SECRET)),
    }
}

/// Create a user row with a properly encrypted PIN
pub async fn create_test_user(pool: &SqlitePool, username: &str, pin: &str) {
    let encrypted_pin = PinCipher::from_secret(TEST_SECRET)
        .encrypt(pin)
        .expect("Failed to encrypt test PIN");

    sqlx::query("INSERT INTO users (username, pin, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(encrypted_pin)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// Create a user row whose pin column is not valid ciphertext
pub async fn create_corrupt_user(pool: &SqlitePool, username: &str) {
    sqlx::query("INSERT INTO users (username, pin, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind("garbage, not ciphertext")
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create corrupt user");
}

/// Insert a note out-of-band (note creation has no endpoint)
pub async fn create_test_note(pool: &SqlitePool, username: &str, content: &str) {
    sqlx::query("INSERT INTO notes (content, username, created_at) VALUES (?, ?, ?)")
        .bind(content)
        .bind(username)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test note");
}

/// Insert a note row with NULL content, which the fetch cannot decode
pub async fn create_malformed_note(pool: &SqlitePool, username: &str) {
    sqlx::query("INSERT INTO notes (content, username, created_at) VALUES (NULL, ?, ?)")
        .bind(username)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create malformed note");
}

/// Count user rows for a username
pub async fn count_users(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Read the stored pin column for a username
pub async fn stored_pin(pool: &SqlitePool, username: &str) -> String {
    sqlx::query_scalar("SELECT pin FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to read stored pin")
}
