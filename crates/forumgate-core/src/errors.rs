//! Gateway error type.
//!
//! Every failure a request can hit is carried as an [`AppError`]: an HTTP
//! status plus an [`anyhow::Error`] whose display text becomes the response
//! body `{"error": "<message>"}`. No other error shape is ever written.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message used in place of backend error text when it must not leak.
pub const REDACTED_BACKEND_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    /// Client-correctable input problem (malformed body, pagination, path).
    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// Missing, malformed, invalid or expired credentials, or a failed role check.
    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// Any failure reported by the remote service, domain or transport alike.
    ///
    /// Always a 500: not-found and internal errors are not told apart.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Backend failure whose text is replaced by [`REDACTED_BACKEND_MESSAGE`].
    pub fn backend_redacted() -> Self {
        Self::backend(anyhow::anyhow!(REDACTED_BACKEND_MESSAGE))
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}
