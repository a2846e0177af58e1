//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so both catalog controllers
//! return the same shapes for the same failure categories.
//!
//! # Key invariants and assumptions
//! - 404, 409 and 400 bodies are `{"message": code}`.
//! - 500 bodies identify the module and operation only.
//!
//! # Security considerations
//! - Internal errors are logged server-side through `build_error_log`; the
//!   client never sees the underlying error text.
use crate::helpers::controller::{
    ControllerErrorResponse, ErrorDetails, build_error_log, build_error_response,
};
use crate::helpers::message::{Message, build_message};
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(Message),
    Controller(ControllerErrorResponse),
}

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` is 5xx exactly when `body` is `ErrorBody::Controller`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn api_message(status: StatusCode, code: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorBody::Message(build_message(code)),
    }
}

pub fn api_not_found(code: &str) -> ApiError {
    api_message(StatusCode::NOT_FOUND, code)
}

pub fn api_conflict(code: &str) -> ApiError {
    api_message(StatusCode::CONFLICT, code)
}

/// Build a 400 for a request body that is not a valid payload.
pub fn api_validation_error(code: &str) -> ApiError {
    api_message(StatusCode::BAD_REQUEST, code)
}

/// Build a 500 Internal Server Error for `module`/`operation`.
///
/// # What it does
/// Logs the normalized error text and returns the generic controller body.
///
/// # Errors
/// - Does not fail.
pub fn api_internal<E>(module: &str, operation: &str, err: &E) -> ApiError
where
    E: ErrorDetails + ?Sized,
{
    tracing::error!(
        module,
        operation,
        error = %build_error_log(Some(err)),
        "catalog controller failure"
    );
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorBody::Controller(build_error_response(module, operation)),
    }
}
