//! Handlers for the `/notes` resource.
//!
//! Every route requires a valid session. Repository calls are owner-scoped,
//! so another user's note is indistinguishable from a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use jot_core::error::CoreError;
use jot_core::notes::{validate_content, validate_title};
use jot_db::models::note::{CreateNote, NoteResponse, UpdateNote};
use jot_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /notes
///
/// List the caller's notes, newest first.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_by_owner(&state.pool, auth.user_id).await?;

    let notes: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
    Ok(Json(DataResponse { data: notes }))
}

/// POST /notes
///
/// Create a new note owned by the caller.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_content(&input.content).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let note = NoteRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = %auth.user_id, note_id = %note.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: NoteResponse::from(note),
        }),
    ))
}

/// PUT /notes/{id}
///
/// Overwrite the title and content of the caller's note.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_content(&input.content).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let note = NoteRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = %auth.user_id, note_id = %id, "Note updated");

    Ok(Json(DataResponse {
        data: NoteResponse::from(note),
    }))
}

/// DELETE /notes/{id}
///
/// Delete the caller's note. Repeated deletes after the first success
/// report 404.
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Note", id }));
    }

    tracing::info!(user_id = %auth.user_id, note_id = %id, "Note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
