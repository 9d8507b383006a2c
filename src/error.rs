//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! Every failure a handler can produce is turned into a JSON body of the form
//! `{"error": "..."}` with a matching status code.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Central application error type for request handling.
///
/// _Internal errors are logged automatically; not-found errors are expected
/// outcomes and are not logged here._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                error!(message = msg, "Internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Renders a panic caught at the transport boundary as a generic 500.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`, so a faulting request
/// never takes down the connection or affects later requests.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(%details, "Request handler panicked");

    AppError::Internal("Internal server error").into_response()
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
