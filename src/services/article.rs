//! Article service: listing query assembly, single reads, and mutations.

use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::article::{Article, ArticleDetail, ArticleListing, ArticleSummary};
use crate::models::listing::{ListingQuery, ResolvedListingParams};
use crate::models::pagination::Pagination;

/// Columns the article listing may sort by.
pub const SORT_COLUMNS: &[&str] = &[
    "author",
    "title",
    "article_id",
    "topic",
    "created_at",
    "votes",
];

const DEFAULT_IMG_URL: &str = "https://default.co.uk/some/random/img.jpg";

/// SQL for the unbounded match count, scoped by the same predicate as the
/// page query.
fn count_sql(with_topic: bool) -> String {
    let mut sql = String::from("SELECT COUNT(*) FROM articles");
    if with_topic {
        sql.push_str(" WHERE topic = $1");
    }
    sql
}

/// SQL for one page of the listing.
///
/// Identifier positions (sort column, direction) are filled from the static
/// whitelist; the topic value stays a bound parameter. Columns are qualified
/// because comments share several names with articles.
fn page_sql(params: &ResolvedListingParams) -> String {
    let where_clause = if params.topic.is_some() {
        "WHERE articles.topic = $1 "
    } else {
        ""
    };

    format!(
        "SELECT articles.author, articles.title, articles.article_id, articles.topic, \
         articles.created_at, articles.votes, articles.article_img_url, \
         COUNT(comments.comment_id)::INT AS comment_count \
         FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id \
         {where_clause}\
         GROUP BY articles.article_id \
         ORDER BY articles.{} {} LIMIT {} OFFSET {}",
        params.sort_column,
        params.direction.as_sql(),
        params.limit,
        params.offset
    )
}

/// List articles with sorting, optional topic filter, and pagination.
pub async fn list(pool: &PgPool, query: &ListingQuery) -> Result<ArticleListing, AppError> {
    let params = ResolvedListingParams::resolve(query, SORT_COLUMNS)?;

    let count_sql_str = count_sql(params.topic.is_some());
    let page_sql_str = page_sql(&params);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql_str);
    let mut data_query = sqlx::query_as::<_, ArticleSummary>(&page_sql_str);
    if let Some(ref topic) = params.topic {
        count_query = count_query.bind(topic);
        data_query = data_query.bind(topic);
    }

    // Two sequential reads on the shared pool; a concurrent writer may be
    // observed between them.
    let total = count_query.fetch_one(pool).await?;

    // Topic validity is defined by the filtered count: zero matches means the
    // topic is unknown (or has no articles, which is indistinguishable here).
    if params.topic.is_some() && total == 0 {
        return Err(AppError::InvalidTopicFilter);
    }

    let articles = data_query.fetch_all(pool).await?;

    Ok(ArticleListing {
        articles,
        pagination: Pagination::build(total, params.limit, params.offset),
    })
}

/// Fetch a single article with its comment count.
pub async fn find_by_id(pool: &PgPool, article_id: i32) -> Result<ArticleDetail, AppError> {
    sqlx::query_as::<_, ArticleDetail>(
        "SELECT articles.*, COUNT(comments.comment_id)::INT AS comment_count \
         FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id \
         WHERE articles.article_id = $1 \
         GROUP BY articles.article_id",
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Article does not exist".to_string()))
}

/// Validated input for creating an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
}

fn require_string<'a>(payload: &'a Value, key: &str) -> Result<&'a str, AppError> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation(format!("Invalid type of {key}")))
}

/// Check the creation payload field by field, in declaration order, so the
/// first offending field names the error.
pub(crate) fn validate_new_article(payload: &Value) -> Result<NewArticle, AppError> {
    Ok(NewArticle {
        author: require_string(payload, "author")?.to_string(),
        title: require_string(payload, "title")?.to_string(),
        body: require_string(payload, "body")?.to_string(),
        topic: require_string(payload, "topic")?.to_string(),
        article_img_url: payload
            .get("article_img_url")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_IMG_URL)
            .to_string(),
    })
}

/// Create an article. Unknown authors and topics surface as reference errors
/// from the store's foreign keys.
pub async fn create(pool: &PgPool, payload: &Value) -> Result<ArticleDetail, AppError> {
    let input = validate_new_article(payload)?;

    let article = sqlx::query_as::<_, Article>(
        "INSERT INTO articles (author, title, body, topic, article_img_url) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&input.author)
    .bind(&input.title)
    .bind(&input.body)
    .bind(&input.topic)
    .bind(&input.article_img_url)
    .fetch_one(pool)
    .await?;

    Ok(ArticleDetail::from_new(article))
}

/// Check the vote adjustment payload: `inc_votes` must be a whole number.
pub(crate) fn validate_inc_votes(payload: &Value) -> Result<i64, AppError> {
    let number = match payload.get("inc_votes") {
        Some(Value::Number(n)) => n,
        _ => {
            return Err(AppError::Validation(
                "Element 'inc_votes' has invalid type".to_string(),
            ))
        }
    };

    number.as_i64().ok_or_else(|| {
        AppError::Validation("Invalid 'inc_votes', expected whole number".to_string())
    })
}

/// Adjust an article's vote count by `inc_votes`.
///
/// The existence check runs first, so a missing article is a 404 even when
/// the payload is also invalid.
pub async fn update_votes(
    pool: &PgPool,
    article_id: i32,
    payload: &Value,
) -> Result<Article, AppError> {
    find_by_id(pool, article_id).await?;

    let inc_votes = validate_inc_votes(payload)?;

    sqlx::query_as::<_, Article>(
        "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING *",
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Article does not exist".to_string()))
}

/// Delete an article together with its comments, in one transaction.
pub async fn delete(pool: &PgPool, article_id: i32) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *tx)
        .await?;

    let deleted = sqlx::query("DELETE FROM articles WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *tx)
        .await?;

    if deleted.rows_affected() == 0 {
        // Dropping the transaction rolls the comment delete back.
        return Err(AppError::NotFound("Article not found".to_string()));
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::SortDirection;
    use serde_json::json;

    fn params(sort_column: &'static str, topic: Option<&str>) -> ResolvedListingParams {
        ResolvedListingParams {
            sort_column,
            direction: SortDirection::Desc,
            topic: topic.map(String::from),
            limit: 5,
            offset: 10,
        }
    }

    #[test]
    fn count_sql_scopes_by_topic() {
        assert_eq!(count_sql(false), "SELECT COUNT(*) FROM articles");
        assert_eq!(count_sql(true), "SELECT COUNT(*) FROM articles WHERE topic = $1");
    }

    #[test]
    fn page_sql_without_topic() {
        let sql = page_sql(&params("created_at", None));
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY articles.created_at DESC"));
        assert!(sql.contains("LIMIT 5 OFFSET 10"));
        assert!(sql.contains("GROUP BY articles.article_id"));
        assert!(sql.contains("COUNT(comments.comment_id)::INT AS comment_count"));
    }

    #[test]
    fn page_sql_with_topic_binds_the_value() {
        let sql = page_sql(&params("votes", Some("cats")));
        assert!(sql.contains("WHERE articles.topic = $1"));
        // Filter values never appear in the SQL text
        assert!(!sql.contains("cats"));
    }

    #[test]
    fn page_sql_never_selects_the_body() {
        let sql = page_sql(&params("title", None));
        assert!(!sql.contains("articles.body"));
    }

    #[test]
    fn new_article_requires_string_fields_in_order() {
        let err = validate_new_article(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type of author");

        let err = validate_new_article(&json!({ "author": "rogersop" })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type of title");

        let err = validate_new_article(&json!({
            "author": "rogersop",
            "title": "On cats",
            "body": 42,
            "topic": "cats",
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid type of body");
    }

    #[test]
    fn new_article_defaults_the_image_url() {
        let input = validate_new_article(&json!({
            "author": "rogersop",
            "title": "On cats",
            "body": "They are great",
            "topic": "cats",
        }))
        .unwrap();
        assert_eq!(input.article_img_url, DEFAULT_IMG_URL);

        let input = validate_new_article(&json!({
            "author": "rogersop",
            "title": "On cats",
            "body": "They are great",
            "topic": "cats",
            "article_img_url": "https://example.com/cat.jpg",
        }))
        .unwrap();
        assert_eq!(input.article_img_url, "https://example.com/cat.jpg");
    }

    #[test]
    fn inc_votes_must_be_a_number() {
        let err = validate_inc_votes(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Element 'inc_votes' has invalid type");

        let err = validate_inc_votes(&json!({ "inc_votes": "five" })).unwrap_err();
        assert_eq!(err.to_string(), "Element 'inc_votes' has invalid type");
    }

    #[test]
    fn inc_votes_must_be_whole() {
        let err = validate_inc_votes(&json!({ "inc_votes": 1.5 })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'inc_votes', expected whole number");

        assert_eq!(validate_inc_votes(&json!({ "inc_votes": -7 })).unwrap(), -7);
        assert_eq!(validate_inc_votes(&json!({ "inc_votes": 0 })).unwrap(), 0);
    }
}
