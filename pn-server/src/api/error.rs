//! REST API error types
//!
//! These errors produce the JSON error envelope `{"error": {code, message}}`
//! with the HTTP status codes of the four request-terminal failure kinds:
//! validation, auth, cipher, storage.

use pn_core::CoreError;
use pn_crypto::CipherError;
use pn_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "AUTH_ERROR", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed username or PIN, rejected before the flow runs (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Credential mismatch or undecryptable stored PIN (401).
    /// The two causes are deliberately not distinguished to the caller.
    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// PIN encryption/decryption failure outside the verify path (500)
    #[error("Cipher error: {message} {location}")]
    Cipher {
        message: String,
        location: ErrorLocation,
    },

    /// Underlying data-store failure (500)
    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// The uninformative credential failure: one fixed message whether the
    /// stored PIN failed to decrypt or simply did not match.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::Auth {
            message: "invalid user credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A validation failure on one named request parameter
    #[track_caller]
    pub fn validation(field: &str, source: CoreError) -> Self {
        ApiError::Validation {
            message: source.message().to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Auth { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "AUTH_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Cipher { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "CIPHER_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Storage { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "STORAGE_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert cipher errors outside the verify path (encrypt at CREATE)
impl From<CipherError> for ApiError {
    #[track_caller]
    fn from(e: CipherError) -> Self {
        let message = match e {
            CipherError::Encrypt { message, .. } => message,
            CipherError::Decrypt { .. } => "ciphertext is not a valid encrypted PIN".to_string(),
        };

        ApiError::Cipher {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors. The raw error text is surfaced to the caller;
/// the source location stays in the server log.
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        let DbError::Sqlx { source, .. } = e;

        ApiError::Storage {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
