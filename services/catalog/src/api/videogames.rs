//! Video-game controller.
//!
//! Same contract as the game-system controller. A name collision on create is
//! a 409 here too.
use crate::api::error::{ApiError, api_conflict, api_internal, api_not_found, api_validation_error};
use crate::api::respond;
use crate::app::AppState;
use crate::helpers::message::{ErrorMessage, Message, build_message};
use crate::model::{VideoGame, VideoGamePayload};
use crate::service::ServiceError;
use crate::service::videogames::{DELETE_VIDEOGAME_NOT_FOUND, UPDATE_VIDEOGAME_NOT_FOUND};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub const MODULE_NAME: &str = "videogames";

pub const VIDEOGAME_NOT_FOUND: &str = "VIDEOGAME_NOT_FOUND";
pub const VIDEOGAME_DELETED_SUCCESSFULLY: &str = "VIDEOGAME_DELETED_SUCCESSFULLY";
pub const INVALID_VIDEOGAME_PAYLOAD: &str = "INVALID_VIDEOGAME_PAYLOAD";

fn rejected(message: &ErrorMessage) -> ApiError {
    match message.code() {
        UPDATE_VIDEOGAME_NOT_FOUND | DELETE_VIDEOGAME_NOT_FOUND => api_not_found(message.code()),
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
    payload: Result<Json<VideoGamePayload>, JsonRejection>,
) -> Result<VideoGamePayload, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection, "invalid video game payload");
        api_validation_error(INVALID_VIDEOGAME_PAYLOAD)
    })
}

#[utoipa::path(
    get,
    path = "/videogames",
    tag = "videogames",
    responses(
        (status = 200, description = "List video games", body = [VideoGame]),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn get_video_games(State(state): State<AppState>) -> Response {
    const OPERATION: &str = "get_video_games";
    respond(MODULE_NAME, OPERATION, async move {
        match state.videogames.get_all().await {
            Ok(items) => Ok(Json(items).into_response()),
            Err(err) => Err(api_internal(MODULE_NAME, OPERATION, &err)),
        }
    })
    .await
}

#[utoipa::path(
    get,
    path = "/videogames/{id}",
    tag = "videogames",
    params(
        ("id" = String, Path, description = "Video game identifier")
    ),
    responses(
        (status = 200, description = "Fetch video game", body = VideoGame),
        (status = 404, description = "Video game not found", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn get_video_game_by_id(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    const OPERATION: &str = "get_video_game_by_id";
    respond(MODULE_NAME, OPERATION, async move {
        match state.videogames.get_by_id(&id).await {
            Ok(Some(record)) => Ok(Json(record).into_response()),
            Ok(None) => Err(api_not_found(VIDEOGAME_NOT_FOUND)),
            Err(err) => Err(api_internal(MODULE_NAME, OPERATION, &err)),
        }
    })
    .await
}

#[utoipa::path(
    post,
    path = "/videogames",
    tag = "videogames",
    request_body = VideoGamePayload,
    responses(
        (status = 201, description = "Video game created", body = VideoGame),
        (status = 400, description = "Malformed payload", body = Message),
        (status = 409, description = "Name already used", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn create_video_game(
    State(state): State<AppState>,
    payload: Result<Json<VideoGamePayload>, JsonRejection>,
) -> Response {
    const OPERATION: &str = "create_video_game";
    respond(MODULE_NAME, OPERATION, async move {
        match payload_or_reject(payload) {
            Ok(payload) => state
                .videogames
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
    path = "/videogames/{id}",
    tag = "videogames",
    params(
        ("id" = String, Path, description = "Video game identifier")
    ),
    request_body = VideoGamePayload,
    responses(
        (status = 200, description = "Video game updated", body = VideoGame),
        (status = 400, description = "Malformed payload", body = Message),
        (status = 404, description = "Video game not found", body = Message),
        (status = 409, description = "Name already used", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn update_video_game(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<VideoGamePayload>, JsonRejection>,
) -> Response {
    const OPERATION: &str = "update_video_game";
    respond(MODULE_NAME, OPERATION, async move {
        match payload_or_reject(payload) {
            Ok(payload) => state
                .videogames
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
    path = "/videogames/{id}",
    tag = "videogames",
    params(
        ("id" = String, Path, description = "Video game identifier")
    ),
    responses(
        (status = 200, description = "Video game deleted", body = Message),
        (status = 404, description = "Video game not found", body = Message),
        (status = 500, description = "Unexpected failure", body = crate::helpers::controller::ControllerErrorResponse)
    )
)]
pub(crate) async fn delete_video_game(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    const OPERATION: &str = "delete_video_game";
    respond(MODULE_NAME, OPERATION, async move {
        match state.videogames.delete(&id).await {
            Ok(()) => Ok(Json(build_message(VIDEOGAME_DELETED_SUCCESSFULLY)).into_response()),
            Err(err) => Err(service_failure(OPERATION, err)),
        }
    })
    .await
}
