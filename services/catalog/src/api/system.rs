//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Provides a lightweight health endpoint for probes.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free.
use crate::api::error::api_internal;
use crate::api::respond;
use crate::api::types::HealthStatus;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

pub const MODULE_NAME: &str = "system";

#[utoipa::path(
    get,
    path = "/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Catalog service health", body = HealthStatus),
        (status = 500, description = "A repository is unavailable", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
/// Return catalog health status.
///
/// # What it does
/// Probes both repositories and returns `ok` if they respond.
///
/// # Errors
/// - Returns 500 if either repository health check fails.
pub(crate) async fn system_health(State(state): State<AppState>) -> Response {
    const OPERATION: &str = "system_health";
    respond(MODULE_NAME, OPERATION, async move {
        if let Err(err) = state.gamesystems.health_check().await {
            return Err(api_internal(MODULE_NAME, OPERATION, &err));
        }
        if let Err(err) = state.videogames.health_check().await {
            return Err(api_internal(MODULE_NAME, OPERATION, &err));
        }
        let status = HealthStatus {
            status: "ok".to_string(),
        };
        Ok(Json(status).into_response())
    })
    .await
}
