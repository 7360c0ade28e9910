//! Topic service: listing and slug-validated creation.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::topic::Topic;

/// Slugs are lowercase letters and hyphens, 3 to 20 characters.
fn slug_pattern() -> &'static Regex {
    static SLUG_PATTERN: OnceLock<Regex> = OnceLock::new();
    SLUG_PATTERN.get_or_init(|| Regex::new(r"^[a-z-]{3,20}$").expect("valid slug pattern"))
}

/// List every topic.
pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
    let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;

    Ok(topics)
}

/// Validated input for creating a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewTopic {
    pub slug: String,
    pub description: String,
}

/// Check the topic payload: slug type, then slug format, then description.
pub(crate) fn validate_new_topic(payload: &Value) -> Result<NewTopic, AppError> {
    let slug = match payload.get("slug").and_then(Value::as_str) {
        Some(slug) if !slug.is_empty() => slug,
        _ => return Err(AppError::Validation("Invalid type of slug".to_string())),
    };

    if !slug_pattern().is_match(slug) {
        return Err(AppError::Validation("Invalid format of slug".to_string()));
    }

    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("Invalid type of description".to_string()))?;

    Ok(NewTopic {
        slug: slug.to_string(),
        description: description.to_string(),
    })
}

/// Create a topic. Duplicate slugs surface as store errors.
pub async fn create(pool: &PgPool, payload: &Value) -> Result<Topic, AppError> {
    let input = validate_new_topic(payload)?;

    let topic = sqlx::query_as::<_, Topic>(
        "INSERT INTO topics (slug, description) VALUES ($1, $2) RETURNING *",
    )
    .bind(&input.slug)
    .bind(&input.description)
    .fetch_one(pool)
    .await?;

    Ok(topic)
}
