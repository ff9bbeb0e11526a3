use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error types for the wiki application
#[derive(Debug)]
pub enum WikiError {
    /// The requested page file does not exist. Recoverable: view redirects
    /// to the edit form, edit shows a blank page.
    NotFound,
    /// The request path does not match `/<view|edit|save>/<title>`.
    /// Indistinguishable from an unmapped route, so it renders as 404.
    InvalidPath,
    /// Any other file-system failure while reading, writing, or listing.
    Io(io::Error),
    /// A template file exists but could not be rendered.
    Template(String),
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            WikiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            WikiError::InvalidPath => (StatusCode::NOT_FOUND, "Not found").into_response(),
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            WikiError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}
