use std::net::SocketAddr;

use axum::routing::{get, patch};
use mimalloc::MiMalloc;
use newswire::config::AppConfig;
use newswire::{db, routes, AppState};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newswire=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(host = %addr, "Starting newswire API server");

    let state = AppState { db: pool, config };

    let app = axum::Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .route("/api", get(routes::api::index))
        .route(
            "/api/topics",
            get(routes::topics::list).post(routes::topics::create),
        )
        .route(
            "/api/articles",
            get(routes::articles::list).post(routes::articles::create),
        )
        .route(
            "/api/articles/{article_id}",
            get(routes::articles::get_by_id)
                .patch(routes::articles::update_votes)
                .delete(routes::articles::delete),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(routes::articles::list_comments).post(routes::articles::add_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(routes::comments::update_votes).delete(routes::comments::delete),
        )
        .route("/api/users", get(routes::users::list))
        .route("/api/users/{username}", get(routes::users::get_by_username))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
