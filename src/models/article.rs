//! Article row types and response payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::pagination::Pagination;

/// Full article row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// Single-article payload carrying the aggregated comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleDetail {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i32,
}

impl ArticleDetail {
    /// Payload for a freshly created article, which cannot have comments yet.
    pub fn from_new(article: Article) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count: 0,
        }
    }
}

/// Listing row: every article column except the body, plus the comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleSummary {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i32,
}

/// Page of articles with its pagination summary.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleListing {
    pub articles: Vec<ArticleSummary>,
    pub pagination: Pagination,
}
