use crate::vocabulary::InvalidDay;
use axum::{Json, http::StatusCode};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the movie table. The server must not start.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse movie data: {0}")]
    Parse(#[from] csv::Error),

    #[error("movie data is missing the '{0}' column")]
    MissingColumn(&'static str),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<InvalidDay> for AppError {
    fn from(err: InvalidDay) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "detail": self.message });
        (self.status, Json(body)).into_response()
    }
}
