use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Key material for the PIN cipher.
///
/// One fixed secret for the whole process: every stored PIN is encrypted
/// under the key derived from it. Changing the secret makes all existing
/// user records undecryptable, which surfaces as failed authentication.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CryptoConfig {
    pub secret: Option<String>,
}

impl CryptoConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.secret.as_deref() {
            Some(secret) if !secret.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::crypto(
                "crypto.secret must be set (config.toml or NOTES_CRYPTO_SECRET)",
            )),
        }
    }
}
