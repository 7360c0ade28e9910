//! Route definitions for the newswire API.

pub mod api;
pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use crate::errors::AppError;

/// Parse a numeric path segment, mapping junk to the store's invalid-type
/// message so `/api/articles/hello` and a malformed bound value read alike.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::Validation("Received invalid type".to_string()))
}
