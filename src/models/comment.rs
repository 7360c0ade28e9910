//! Comment row type and response payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::pagination::Pagination;

/// Comment row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Page of comments with its pagination summary.
#[derive(Debug, Clone, Serialize)]
pub struct CommentListing {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}
