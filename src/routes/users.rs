//! User routes: listing and single reads.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::services::user as user_service;
use crate::AppState;

/// GET /api/users — list every user.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = user_service::list(&state.db).await?;
    Ok(Json(json!({ "users": users })))
}

/// GET /api/users/{username} — single user.
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = user_service::find_by_username(&state.db, &username).await?;
    Ok(Json(json!({ "user": user })))
}
