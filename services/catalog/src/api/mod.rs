//! Catalog HTTP API module.
//!
//! # Purpose
//! Exposes the controller modules plus the response helper every handler
//! funnels its body through.
pub mod error;
pub mod gamesystems;
pub mod openapi;
pub mod system;
pub mod types;
pub mod videogames;

use crate::api::error::{ApiError, api_internal};
use crate::helpers::controller::PanicReport;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Run a handler body, turn its outcome into a response and count it.
///
/// A panic anywhere below the body becomes the same 500 as an unexpected
/// store error for `module` and `operation`.
pub(crate) async fn respond<F>(module: &'static str, operation: &'static str, body: F) -> Response
where
    F: Future<Output = Result<Response, ApiError>>,
{
    let result = match AssertUnwindSafe(body).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(api_internal(
            module,
            operation,
            &PanicReport::from_payload(payload.as_ref()),
        )),
    };
    let response = result.unwrap_or_else(|err| err.into_response());
    metrics::counter!(
        "catalog_http_responses_total",
        "module" => module,
        "operation" => operation,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    response
}
