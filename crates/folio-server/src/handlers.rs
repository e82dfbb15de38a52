//! HTTP handlers
//!
//! Each handler issues at most one read against the store and renders the
//! result; there is no cross-request state beyond the connection pool.

use crate::error::AppError;
use crate::pages;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use folio_core::listing;
use folio_core::project::ProjectRepository;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
}

/// Home page with tech-stack badges and the curated featured projects
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let featured = listing::featured(&state.db, &state.site.featured_projects).await?;
    Ok(Html(pages::home(&state.site.tech_stack, &featured)))
}

/// Listing page, optionally filtered by a raw category token
///
/// Unknown tokens render an empty listing rather than an error.
pub async fn projects(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let listing = listing::list(&state.db, query.category.as_deref()).await?;
    Ok(Html(pages::projects(&listing)))
}

/// Detail page; malformed and unknown ids both produce the 404 page
pub async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::NotFound)?;

    let repo = ProjectRepository::new(&state.db);
    let project = repo.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(pages::project_detail(&project)))
}

/// Stored media assets (project images)
pub async fn media_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let (bytes, mime) = state.media.read(&path)?;
    Ok(([(header::CONTENT_TYPE, mime)], bytes).into_response())
}

/// Store health probe
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.db.health_check().await {
        Ok(()) => Json(json!({"status": "ok"})).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable"})),
            )
                .into_response()
        }
    }
}

/// Unmatched routes get the 404 page
pub async fn fallback() -> Response {
    AppError::NotFound.into_response()
}
