use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("PIN encryption failed: {message} {location}")]
    Encrypt {
        message: String,
        location: ErrorLocation,
    },

    /// Covers every decryption failure: bad encoding, truncated input,
    /// failed authentication tag, non-UTF-8 plaintext. Callers get one
    /// undifferentiated variant on purpose.
    #[error("ciphertext is not a valid encrypted PIN {location}")]
    Decrypt { location: ErrorLocation },
}

impl CipherError {
    #[track_caller]
    pub fn encrypt<S: Into<String>>(message: S) -> Self {
        CipherError::Encrypt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decrypt() -> Self {
        CipherError::Decrypt {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CipherError>;
