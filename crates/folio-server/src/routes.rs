//! Route table

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Build the application router over the shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/healthz", get(handlers::healthz))
        .route("/projects", get(handlers::projects))
        .route("/projects/", get(handlers::projects))
        .route("/projects/:id", get(handlers::project_detail))
        .route("/projects/:id/", get(handlers::project_detail))
        .route("/media/*path", get(handlers::media_asset))
        .fallback(handlers::fallback)
        .with_state(state)
}
