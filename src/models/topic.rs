//! Topic row type.

use serde::Serialize;
use sqlx::FromRow;

/// Topic row; the slug doubles as the primary key and the article filter value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
