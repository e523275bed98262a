//! Widget Routes
//!
//! - POST /fn/{name} - Server functions called by the mounted widgets

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::IntoResponse,
};
use leptos::provide_context;
use std::sync::Arc;

use crate::web::state::AppState;

/// POST /fn/{name}
pub async fn server_fn(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> impl IntoResponse {
    leptos_axum::handle_server_fns_with_context(move || provide_context(Arc::clone(&state)), request)
        .await
}
