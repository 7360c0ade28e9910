//! User row type.

use serde::Serialize;
use sqlx::FromRow;

/// User row; usernames are the primary key and the author reference value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}
