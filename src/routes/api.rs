//! API index route: a self-describing map of every endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /api — describe the available endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "GET /api": {
                "description": "serves up a json representation of all the available endpoints of the api"
            },
            "GET /api/topics": {
                "description": "serves an array of all topics",
                "queries": [],
                "exampleResponse": {
                    "topics": [{ "slug": "football", "description": "Footie!" }]
                }
            },
            "POST /api/topics": {
                "description": "adds a new topic and serves it back",
                "queries": [],
                "exampleRequest": {
                    "slug": "football",
                    "description": "Footie!"
                }
            },
            "GET /api/articles": {
                "description": "serves an array of all articles",
                "queries": ["topic", "sort_by", "order", "limit", "page"],
                "exampleResponse": {
                    "articles": [{
                        "author": "weegembump",
                        "title": "Seafood substitutions are increasing",
                        "article_id": 33,
                        "topic": "cooking",
                        "created_at": "2018-05-30T15:59:13.341Z",
                        "votes": 0,
                        "article_img_url": "https://images.example.com/seafood.jpg",
                        "comment_count": 6
                    }],
                    "pagination": {
                        "total_count": 37,
                        "current_page": 1,
                        "total_pages": 8,
                        "next_page": 2,
                        "prev_page": null
                    }
                }
            },
            "POST /api/articles": {
                "description": "adds a new article and serves it back",
                "queries": [],
                "exampleRequest": {
                    "author": "weegembump",
                    "title": "Seafood substitutions are increasing",
                    "body": "Text from the article..",
                    "topic": "cooking",
                    "article_img_url": "https://images.example.com/seafood.jpg"
                }
            },
            "GET /api/articles/{article_id}": {
                "description": "serves a single article with its comment count",
                "queries": []
            },
            "PATCH /api/articles/{article_id}": {
                "description": "adjusts an article's votes and serves the updated article",
                "queries": [],
                "exampleRequest": { "inc_votes": 1 }
            },
            "DELETE /api/articles/{article_id}": {
                "description": "deletes an article together with its comments",
                "queries": []
            },
            "GET /api/articles/{article_id}/comments": {
                "description": "serves an array of comments for the given article",
                "queries": ["sort_by", "order", "limit", "page"]
            },
            "POST /api/articles/{article_id}/comments": {
                "description": "adds a comment to the given article and serves it back",
                "queries": [],
                "exampleRequest": {
                    "username": "weegembump",
                    "body": "Great article!"
                }
            },
            "PATCH /api/comments/{comment_id}": {
                "description": "adjusts a comment's votes and serves the updated comment",
                "queries": [],
                "exampleRequest": { "inc_votes": 1 }
            },
            "DELETE /api/comments/{comment_id}": {
                "description": "deletes a comment",
                "queries": []
            },
            "GET /api/users": {
                "description": "serves an array of all users",
                "queries": []
            },
            "GET /api/users/{username}": {
                "description": "serves a single user",
                "queries": []
            }
        }
    }))
}
