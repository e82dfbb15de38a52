//! HTTP error mapping
//!
//! Core errors surface at the boundary: missing resources become 404 pages,
//! bad input becomes 400, everything else is a logged 500.

use crate::pages;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio_core::Error;

/// Error wrapper rendered as an HTTP response
#[derive(Debug)]
pub enum AppError {
    /// Resource missing (unknown id, malformed id, absent asset)
    NotFound,
    /// Anything the core propagated that is not a missing resource
    Core(Error),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            err if err.is_not_found() => Self::NotFound,
            Error::Media(_) => Self::NotFound,
            err => Self::Core(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
            }
            AppError::Core(Error::Validation(message)) => {
                (StatusCode::BAD_REQUEST, Html(pages::bad_request(&message))).into_response()
            }
            AppError::Core(err) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error())).into_response()
            }
        }
    }
}
