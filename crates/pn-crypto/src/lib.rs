pub mod error;
pub mod pin_cipher;

pub use error::{CipherError, Result};
pub use pin_cipher::PinCipher;
