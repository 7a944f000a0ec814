use pn_crypto::PinCipher;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Process-wide PIN cipher, constructed once at startup from the
    /// configured secret.
    pub cipher: Arc<PinCipher>,
}
