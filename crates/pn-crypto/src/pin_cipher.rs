//! AES-256-GCM encryption of PINs at rest.
//!
//! A single process-wide key, derived from the configured secret, encrypts
//! every stored PIN. Each ciphertext carries its own random 96-bit nonce:
//! the stored string is `base64(nonce || ciphertext || tag)`.
//!
//! This is reversible credential storage, not hashing. The service decrypts
//! the stored value at every authentication check and compares plaintexts.

use crate::error::{CipherError, Result};

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Nonce size for AES-GCM (96 bits).
const NONCE_SIZE: usize = 12;

/// Authentication tag size (128 bits).
const TAG_SIZE: usize = 16;

/// Reversible PIN transform with a fixed process-wide key.
///
/// Constructed once at startup and injected into request handlers through
/// the application state.
pub struct PinCipher {
    cipher: Aes256Gcm,
}

impl PinCipher {
    pub fn new(key: &[u8; 32]) -> Self {
        let cipher = Aes256Gcm::new_from_slice(key).expect("Invalid key length");
        Self { cipher }
    }

    /// Derive the AES key from a configured secret string via SHA-256.
    pub fn from_secret(secret: &str) -> Self {
        let key: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
        Self::new(&key)
    }

    /// Encrypt a plaintext PIN into its stored representation.
    pub fn encrypt(&self, pin: &str) -> Result<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, pin.as_bytes())
            .map_err(|e| CipherError::encrypt(e.to_string()))?;

        // Prepend the nonce so decrypt is self-contained
        let mut buf = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        buf.extend_from_slice(&nonce_bytes);
        buf.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(buf))
    }

    /// Decrypt a stored representation back to the plaintext PIN.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let raw = BASE64
            .decode(ciphertext)
            .map_err(|_| CipherError::decrypt())?;

        if raw.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CipherError::decrypt());
        }

        let (nonce_bytes, payload) = raw.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, payload)
            .map_err(|_| CipherError::decrypt())?;

        String::from_utf8(plaintext).map_err(|_| CipherError::decrypt())
    }
}
