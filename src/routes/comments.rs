//! Comment routes addressed by comment id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::routes::parse_id;
use crate::services::comment as comment_service;
use crate::AppState;

/// PATCH /api/comments/{comment_id} — adjust the vote count.
pub async fn update_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let comment_id = parse_id(&comment_id)?;
    let comment = comment_service::update_votes(&state.db, comment_id, &body).await?;
    Ok(Json(json!({ "comment": comment })))
}

/// DELETE /api/comments/{comment_id} — remove a comment.
pub async fn delete(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let comment_id = parse_id(&comment_id)?;
    comment_service::delete(&state.db, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
