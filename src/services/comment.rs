//! Comment service: per-article listing, creation, vote updates, deletion.

use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::comment::{Comment, CommentListing};
use crate::models::listing::{ListingQuery, ResolvedListingParams};
use crate::models::pagination::Pagination;
use crate::services::article;

/// Columns the comment listing may sort by.
pub const SORT_COLUMNS: &[&str] = &["comment_id", "votes", "created_at", "author", "article_id"];

const COUNT_SQL: &str = "SELECT COUNT(*) FROM comments WHERE article_id = $1";

/// SQL for one page of an article's comments.
fn page_sql(params: &ResolvedListingParams) -> String {
    format!(
        "SELECT comment_id, article_id, author, body, votes, created_at \
         FROM comments WHERE article_id = $1 \
         ORDER BY {} {} LIMIT {} OFFSET {}",
        params.sort_column,
        params.direction.as_sql(),
        params.limit,
        params.offset
    )
}

/// List one article's comments with sorting and pagination.
///
/// Query parameters are checked before the article lookup, so a bad
/// `sort_by` is a 400 even when the article is also missing. An existing
/// article with no comments lists as an empty page, not an error.
pub async fn list_for_article(
    pool: &PgPool,
    article_id: i32,
    query: &ListingQuery,
) -> Result<CommentListing, AppError> {
    let params = ResolvedListingParams::resolve(query, SORT_COLUMNS)?;

    article::find_by_id(pool, article_id).await?;

    let total = sqlx::query_scalar::<_, i64>(COUNT_SQL)
        .bind(article_id)
        .fetch_one(pool)
        .await?;

    let comments = sqlx::query_as::<_, Comment>(&page_sql(&params))
        .bind(article_id)
        .fetch_all(pool)
        .await?;

    Ok(CommentListing {
        comments,
        pagination: Pagination::build(total, params.limit, params.offset),
    })
}

/// Validated input for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewComment {
    pub username: String,
    pub body: String,
}

/// Check the comment payload: both fields present, body at least three
/// characters.
pub(crate) fn validate_new_comment(payload: &Value) -> Result<NewComment, AppError> {
    let object = match payload.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(AppError::Validation("Invalid data".to_string())),
    };

    let body = object
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("Element 'body' has wrong type".to_string()))?;

    if body.len() < 3 {
        return Err(AppError::Validation("Element 'body' is too short".to_string()));
    }

    let username = object
        .get("username")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("Element 'username' has wrong type".to_string()))?;

    Ok(NewComment {
        username: username.to_string(),
        body: body.to_string(),
    })
}

/// Post a comment on an article.
///
/// The article lookup runs first, so a missing article is a 404 even when
/// the payload is also invalid. Unknown usernames surface as reference
/// errors from the store's foreign key.
pub async fn create_for_article(
    pool: &PgPool,
    article_id: i32,
    payload: &Value,
) -> Result<Comment, AppError> {
    article::find_by_id(pool, article_id).await?;

    let input = validate_new_comment(payload)?;

    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(article_id)
    .bind(&input.username)
    .bind(&input.body)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Check the vote adjustment payload: `inc_votes` must be a whole number.
pub(crate) fn validate_inc_votes(payload: &Value) -> Result<i64, AppError> {
    payload
        .get("inc_votes")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::Validation("Invalid type of inc_votes".to_string()))
}

/// Adjust a comment's vote count by `inc_votes`.
pub async fn update_votes(
    pool: &PgPool,
    comment_id: i32,
    payload: &Value,
) -> Result<Comment, AppError> {
    let inc_votes = validate_inc_votes(payload)?;

    sqlx::query_as::<_, Comment>(
        "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING *",
    )
    .bind(inc_votes)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
}

/// Delete a comment by id.
pub async fn delete(pool: &PgPool, comment_id: i32) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Comment not found".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::SortDirection;
    use serde_json::json;

    #[test]
    fn page_sql_orders_and_pages() {
        let params = ResolvedListingParams {
            sort_column: "votes",
            direction: SortDirection::Asc,
            topic: None,
            limit: 5,
            offset: 5,
        };
        let sql = page_sql(&params);
        assert!(sql.contains("WHERE article_id = $1"));
        assert!(sql.contains("ORDER BY votes ASC"));
        assert!(sql.contains("LIMIT 5 OFFSET 5"));
    }

    #[test]
    fn empty_payload_is_invalid_data() {
        let err = validate_new_comment(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data");

        let err = validate_new_comment(&json!("not an object")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid data");
    }

    #[test]
    fn comment_body_is_checked_before_username() {
        let err = validate_new_comment(&json!({ "username": 42 })).unwrap_err();
        assert_eq!(err.to_string(), "Element 'body' has wrong type");

        let err = validate_new_comment(&json!({
            "username": "lurker",
            "body": "ok",
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Element 'body' is too short");

        let err = validate_new_comment(&json!({
            "username": 42,
            "body": "long enough",
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Element 'username' has wrong type");
    }

    #[test]
    fn valid_comment_payload_passes() {
        let input = validate_new_comment(&json!({
            "username": "lurker",
            "body": "three",
        }))
        .unwrap();
        assert_eq!(input.username, "lurker");
        assert_eq!(input.body, "three");
    }

    #[test]
    fn comment_inc_votes_must_be_whole() {
        let err = validate_inc_votes(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type of inc_votes");

        let err = validate_inc_votes(&json!({ "inc_votes": 1.5 })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type of inc_votes");

        assert_eq!(validate_inc_votes(&json!({ "inc_votes": -3 })).unwrap(), -3);
    }
}
