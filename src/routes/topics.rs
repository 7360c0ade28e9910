//! Topic routes: listing and creation.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::services::topic as topic_service;
use crate::AppState;

/// GET /api/topics — list every topic.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let topics = topic_service::list(&state.db).await?;
    Ok(Json(json!({ "topics": topics })))
}

/// POST /api/topics — create a topic.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let topic = topic_service::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "topic": topic }))))
}
