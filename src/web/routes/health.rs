//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes liveness and readiness checks.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::web::dto::HealthResponse;
use crate::web::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Pages render without any collaborator, so the server is ready once the
/// route table is populated.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.routes.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sites = state.registry().iter().count();
    let routes = state.routes.len();

    let status = if sites > 0 && routes > 0 { "healthy" } else { "unhealthy" };

    Json(HealthResponse {
        status: status.to_string(),
        sites,
        routes,
        chat_sessions: state.sessions.len().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
