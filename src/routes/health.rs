//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// Liveness probe, always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe, checks database connectivity.
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => ("ok".to_string(), "connected".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            ("degraded".to_string(), format!("error: {e}"))
        }
    };

    Json(HealthStatus { status, database })
}
