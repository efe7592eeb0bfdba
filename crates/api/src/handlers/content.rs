//! Handlers for content CRUD.
//!
//! Responses are the bare entity (or array): the consumers of this API
//! parse `Content` / `Content[]` directly, with no envelope. The transport
//! layer imposes no content minimums; title/body rules are applied by
//! editing UIs before a request is ever sent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::models::content::{CreateContent, UpdateContent};
use quill_db::repositories::ContentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /content
///
/// List all content records in id order.
pub async fn list_contents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contents = ContentRepo::list(&state.pool).await?;
    Ok(Json(contents))
}

/// GET /content/{id}
///
/// Get a single content record by ID.
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let content = ContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Content",
                id,
            })
        })?;

    Ok(Json(content))
}

/// POST /content
///
/// Create a new content record. Both fields are optional.
pub async fn create_content(
    State(state): State<AppState>,
    Json(input): Json<CreateContent>,
) -> AppResult<impl IntoResponse> {
    let content = ContentRepo::create(&state.pool, &input).await?;

    tracing::info!(content_id = content.id, "Content created");

    Ok((StatusCode::CREATED, Json(content)))
}

/// PUT /content/{id}
///
/// Partially update a content record; absent fields are left unchanged.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContent>,
) -> AppResult<impl IntoResponse> {
    let content = ContentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Content",
                id,
            })
        })?;

    tracing::info!(content_id = id, "Content updated");

    Ok(Json(content))
}

/// DELETE /content/{id}
///
/// Delete a content record. Replies 204 with no body.
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContentRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }));
    }

    tracing::info!(content_id = id, "Content deleted");

    Ok(StatusCode::NO_CONTENT)
}
