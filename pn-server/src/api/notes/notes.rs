//! Notes REST API handler
//!
//! One read endpoint carrying the whole user/notes flow: look the user up
//! by username, creating it on first contact (PIN encrypted at rest) or
//! verifying the supplied PIN against the stored ciphertext, then return
//! every note belonging to that username.

use crate::{ApiError, ApiResult, NoteDto, NoteListResponse, NotesQuery, app_state::AppState};

use pn_core::{User, validate_pin, validate_username};
use pn_db::{NoteRepository, UserRepository};

use axum::{
    Json,
    extract::{Query, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/notes?username=<u>&pin=<p>
///
/// Returns all notes of a user. An unknown username is registered on the
/// spot with the supplied PIN; a known one must present the PIN it was
/// created with.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> ApiResult<Json<NoteListResponse>> {
    validate_username(&query.username).map_err(|e| ApiError::validation("username", e))?;
    validate_pin(&query.pin).map_err(|e| ApiError::validation("pin", e))?;

    ensure_user(&state, &query.username, &query.pin).await?;

    let repo = NoteRepository::new(state.pool.clone());
    let notes = repo.find_by_username(&query.username).await?;

    Ok(Json(NoteListResponse {
        notes: notes.into_iter().map(NoteDto::from).collect(),
    }))
}

// =============================================================================
// Flow
// =============================================================================

/// LOOKUP then CREATE or VERIFY.
///
/// Unknown username: encrypt the PIN and insert the user row. Known
/// username: decrypt the stored ciphertext and compare. Decrypt failure and
/// PIN mismatch collapse into the same auth error on purpose.
async fn ensure_user(state: &AppState, username: &str, pin: &str) -> ApiResult<()> {
    let repo = UserRepository::new(state.pool.clone());

    match repo.find_by_username(username).await? {
        None => {
            let encrypted_pin = state.cipher.encrypt(pin)?;
            let user = User::new(username.to_string(), encrypted_pin);
            repo.create(&user).await?;

            log::info!("Created user {}", username);
            Ok(())
        }
        Some(user) => match state.cipher.decrypt(&user.encrypted_pin) {
            Ok(stored_pin) if stored_pin == pin => Ok(()),
            _ => Err(ApiError::invalid_credentials()),
        },
    }
}
