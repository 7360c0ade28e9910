//! User service: listing and single reads.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

/// List every user.
pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Fetch a single user by username.
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT username, name, avatar_url FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
