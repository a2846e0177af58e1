//! OpenAPI schema aggregation for the catalog API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for docs
//! and client generation.
use crate::api::{gamesystems, system, types::HealthStatus, videogames};
use crate::helpers::controller::ControllerErrorResponse;
use crate::helpers::message::Message;
use crate::model::{GameSystem, GameSystemPayload, VideoGame, VideoGamePayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "catalog",
        version = "v1",
        description = "Game systems and video games catalog HTTP API"
    ),
    paths(
        system::system_health,
        gamesystems::get_game_systems,
        gamesystems::get_game_system_by_id,
        gamesystems::create_game_system,
        gamesystems::update_game_system,
        gamesystems::delete_game_system,
        videogames::get_video_games,
        videogames::get_video_game_by_id,
        videogames::create_video_game,
        videogames::update_video_game,
        videogames::delete_video_game
    ),
    components(schemas(
        HealthStatus,
        Message,
        ControllerErrorResponse,
        GameSystem,
        GameSystemPayload,
        VideoGame,
        VideoGamePayload
    )),
    tags(
        (name = "system", description = "Health endpoints"),
        (name = "gamesystems", description = "Game system management"),
        (name = "videogames", description = "Video game management")
    )
)]
pub struct ApiDoc;
