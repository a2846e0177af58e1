//! Catalog HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::model::{GameSystem, VideoGame};
use crate::observability;
use crate::service::{GameSystemService, VideoGameService};
use crate::store::Repository;
use crate::store::memory::InMemoryRepository;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub gamesystems: Arc<GameSystemService>,
    pub videogames: Arc<VideoGameService>,
}

impl AppState {
    pub fn new(
        gamesystems: Arc<dyn Repository<GameSystem>>,
        videogames: Arc<dyn Repository<VideoGame>>,
    ) -> Self {
        Self {
            gamesystems: Arc::new(GameSystemService::new(gamesystems)),
            videogames: Arc::new(VideoGameService::new(videogames)),
        }
    }

    /// Empty in-memory collections.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<GameSystem>::new()),
            Arc::new(InMemoryRepository::<VideoGame>::new()),
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/gamesystems",
            axum::routing::get(api::gamesystems::get_game_systems)
                .post(api::gamesystems::create_game_system),
        )
        .route(
            "/gamesystems/:id",
            axum::routing::get(api::gamesystems::get_game_system_by_id)
                .put(api::gamesystems::update_game_system)
                .delete(api::gamesystems::delete_game_system),
        )
        .route(
            "/videogames",
            axum::routing::get(api::videogames::get_video_games)
                .post(api::videogames::create_video_game),
        )
        .route(
            "/videogames/:id",
            axum::routing::get(api::videogames::get_video_game_by_id)
                .put(api::videogames::update_video_game)
                .delete(api::videogames::delete_video_game),
        )
        .merge(utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(trace_layer)
        .with_state(state)
}
