//! Game-system controller.
//!
//! # Purpose
//! Adapts `/gamesystems` requests into `GameSystemService` calls and maps each
//! outcome to a status code and JSON body:
//! - missing record on read -> 404 `GAMESYSTEM_NOT_FOUND`
//! - rejected mutation -> 404 or 409 carrying the service's code
//! - any store failure or panic -> 500 naming this module and the operation
use crate::api::error::{ApiError, api_conflict, api_internal, api_not_found, api_validation_error};
use crate::api::respond;
use crate::app::AppState;
use crate::helpers::message::{ErrorMessage, Message, build_message};
use crate::model::{GameSystem, GameSystemPayload};
use crate::service::ServiceError;
use crate::service::gamesystems::{DELETE_GAMESYSTEM_NOT_FOUND, UPDATE_GAMESYSTEM_NOT_FOUND};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub const MODULE_NAME: &str = "gamesystems";

pub const GAMESYSTEM_NOT_FOUND: &str = "GAMESYSTEM_NOT_FOUND";
pub const GAMESYSTEM_DELETED_SUCCESSFULLY: &str = "GAMESYSTEM_DELETED_SUCCESSFULLY";
pub const INVALID_GAMESYSTEM_PAYLOAD: &str = "INVALID_GAMESYSTEM_PAYLOAD";

fn rejected(message: &ErrorMessage) -> ApiError {
    match message.code() {
        UPDATE_GAMESYSTEM_NOT_FOUND | DELETE_GAMESYSTEM_NOT_FOUND => api_not_found(message.code()),
        code => api_conflict(code),
    }
}

fn service_failure(operation: &str, err: ServiceError) -> ApiError {
    match err {
        ServiceError::Rejected(message) => rejected(&message),
        ServiceError::Unexpected(err) => api_internal(MODULE_NAME, operation, &err),
    }
}

fn payload_or_reject(
    payload: Result<Json<GameSystemPayload>, JsonRejection>,
) -> Result<GameSystemPayload, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection, "invalid game system payload");
        api_validation_error(INVALID_GAMESYSTEM_PAYLOAD)
    })
}

#[utoipa::path(
    get,
    path = "/gamesystems",
    tag = "gamesystems",
    responses(
        (status = 200, description = "List game systems", body = [GameSystem]),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn get_game_systems(State(state): State<AppState>) -> Response {
    const OPERATION: &str = "get_game_systems";
    respond(MODULE_NAME, OPERATION, async move {
        match state.gamesystems.get_all().await {
            Ok(items) => Ok(Json(items).into_response()),
            Err(err) => Err(api_internal(MODULE_NAME, OPERATION, &err)),
        }
    })
    .await
}

#[utoipa::path(
    get,
    path = "/gamesystems/{id}",
    tag = "gamesystems",
    params(
        ("id" = String, Path, description = "Game system identifier")
    ),
    responses(
        (status = 200, description = "Fetch game system", body = GameSystem),
        (status = 404, description = "Game system not found", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn get_game_system_by_id(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    const OPERATION: &str = "get_game_system_by_id";
    respond(MODULE_NAME, OPERATION, async move {
        match state.gamesystems.get_by_id(&id).await {
            Ok(Some(record)) => Ok(Json(record).into_response()),
            Ok(None) => Err(api_not_found(GAMESYSTEM_NOT_FOUND)),
            Err(err) => Err(api_internal(MODULE_NAME, OPERATION, &err)),
        }
    })
    .await
}

#[utoipa::path(
    post,
    path = "/gamesystems",
    tag = "gamesystems",
    request_body = GameSystemPayload,
    responses(
        (status = 201, description = "Game system created", body = GameSystem),
        (status = 400, description = "Malformed payload", body = Message),
        (status = 409, description = "Name already used", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn create_game_system(
    State(state): State<AppState>,
    payload: Result<Json<GameSystemPayload>, JsonRejection>,
) -> Response {
    const OPERATION: &str = "create_game_system";
    respond(MODULE_NAME, OPERATION, async move {
        match payload_or_reject(payload) {
            Ok(payload) => state
                .gamesystems
                .create(payload)
                .await
                .map(|created| (StatusCode::CREATED, Json(created)).into_response())
                .map_err(|err| service_failure(OPERATION, err)),
            Err(err) => Err(err),
        }
    })
    .await
}

#[utoipa::path(
    put,
    path = "/gamesystems/{id}",
    tag = "gamesystems",
    params(
        ("id" = String, Path, description = "Game system identifier")
    ),
    request_body = GameSystemPayload,
    responses(
        (status = 200, description = "Game system updated", body = GameSystem),
        (status = 400, description = "Malformed payload", body = Message),
        (status = 404, description = "Game system not found", body = Message),
        (status = 409, description = "Name already used", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn update_game_system(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<GameSystemPayload>, JsonRejection>,
) -> Response {
    const OPERATION: &str = "update_game_system";
    respond(MODULE_NAME, OPERATION, async move {
        match payload_or_reject(payload) {
            Ok(payload) => state
                .gamesystems
                .update(&id, payload)
                .await
                .map(|updated| Json(updated).into_response())
                .map_err(|err| service_failure(OPERATION, err)),
            Err(err) => Err(err),
        }
    })
    .await
}

#[utoipa::path(
    delete,
    path = "/gamesystems/{id}",
    tag = "gamesystems",
    params(
        ("id" = String, Path, description = "Game system identifier")
    ),
    responses(
        (status = 200, description = "Game system deleted", body = Message),
        (status = 404, description = "Game system not found", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn delete_game_system(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    const OPERATION: &str = "delete_game_system";
    respond(MODULE_NAME, OPERATION, async move {
        match state.gamesystems.delete(&id).await {
            Ok(()) => Ok(Json(build_message(GAMESYSTEM_DELETED_SUCCESSFULLY)).into_response()),
            Err(err) => Err(service_failure(OPERATION, err)),
        }
    })
    .await
}
