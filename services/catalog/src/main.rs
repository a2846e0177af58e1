//! Catalog HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage and HTTP routers, then serves the API and the
//! metrics listener until Ctrl-C.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use anyhow::Context;
use catalog::app::{AppState, build_router};
use catalog::config::CatalogConfig;
use catalog::observability;
use catalog::store::memory::InMemoryRepository;
use catalog::store::seed;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: CatalogConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("catalog")?;
    let state = build_state(&config);
    let metrics_listener = tokio::net::TcpListener::bind(config.metrics_bind)
        .await
        .with_context(|| format!("bind metrics listener on {}", config.metrics_bind))?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        metrics_listener,
    ));

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, seeded = config.seed_sample_data, "catalog listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    metrics_task.abort();
    let _ = metrics_task.await;
    tracing::info!("catalog stopped");
    Ok(())
}

fn build_state(config: &CatalogConfig) -> AppState {
    if !config.seed_sample_data {
        return AppState::in_memory();
    }
    AppState::new(
        Arc::new(InMemoryRepository::with_records(seed::sample_game_systems())),
        Arc::new(InMemoryRepository::with_records(seed::sample_video_games())),
    )
}
