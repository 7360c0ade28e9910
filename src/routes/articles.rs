//! Article routes: listing, single reads, creation, votes, deletion, and
//! the nested comment collection.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::article::ArticleListing;
use crate::models::comment::CommentListing;
use crate::models::listing::ListingQuery;
use crate::routes::parse_id;
use crate::services::{article as article_service, comment as comment_service};
use crate::AppState;

/// GET /api/articles — list articles with sorting, topic filter, pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ArticleListing>, AppError> {
    let listing = article_service::list(&state.db, &query).await?;
    Ok(Json(listing))
}

/// POST /api/articles — create an article.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let article = article_service::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "article": article }))))
}

/// GET /api/articles/{article_id} — single article with comment count.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let article_id = parse_id(&article_id)?;
    let article = article_service::find_by_id(&state.db, article_id).await?;
    Ok(Json(json!({ "article": article })))
}

/// PATCH /api/articles/{article_id} — adjust the vote count.
pub async fn update_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let article_id = parse_id(&article_id)?;
    let article = article_service::update_votes(&state.db, article_id, &body).await?;
    Ok(Json(json!({ "article": article })))
}

/// DELETE /api/articles/{article_id} — remove an article and its comments.
pub async fn delete(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let article_id = parse_id(&article_id)?;
    article_service::delete(&state.db, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/articles/{article_id}/comments — list an article's comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<CommentListing>, AppError> {
    let article_id = parse_id(&article_id)?;
    let listing = comment_service::list_for_article(&state.db, article_id, &query).await?;
    Ok(Json(listing))
}

/// POST /api/articles/{article_id}/comments — post a comment.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let article_id = parse_id(&article_id)?;
    let comment = comment_service::create_for_article(&state.db, article_id, &body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}
