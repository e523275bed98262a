//! Theme Routes
//!
//! - GET /api/theme?path= - Theme resolved for a path
//! - GET /api/routes - Every concrete page route

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::web::dto::{RoutesResponse, ThemeQuery, ThemeResponse};
use crate::web::state::AppState;

/// GET /api/theme
pub async fn resolve_theme(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThemeQuery>,
) -> Json<ThemeResponse> {
    let theme = state.resolver.resolve(&query.path);
    Json(ThemeResponse::from(&theme))
}

/// GET /api/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        root_redirect: state.routes.root_redirect(),
        routes: state.routes.entries(),
    })
}
