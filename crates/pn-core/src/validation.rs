//! Syntactic validation of the two request credentials.
//!
//! These checks run at the HTTP boundary before any storage or cipher work:
//! a request that fails here never reaches the user/notes flow.

use crate::error::{CoreError, Result};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MIN_PIN_LENGTH: usize = 4;
pub const MAX_PIN_LENGTH: usize = 8;

/// A valid username is 3-32 characters of `[A-Za-z0-9_]`.
pub fn validate_username(username: &str) -> Result<()> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::validation(format!(
            "username must be {}-{} characters, got {}",
            MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH, len
        )));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CoreError::validation(
            "username may only contain letters, digits and underscores",
        ));
    }

    Ok(())
}

/// A valid PIN is 4-8 ASCII digits.
pub fn validate_pin(pin: &str) -> Result<()> {
    let len = pin.chars().count();
    if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&len) {
        return Err(CoreError::validation(format!(
            "pin must be {}-{} digits, got {} characters",
            MIN_PIN_LENGTH, MAX_PIN_LENGTH, len
        )));
    }

    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::validation("pin may only contain digits"));
    }

    Ok(())
}
