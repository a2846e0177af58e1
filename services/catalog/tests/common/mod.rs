#![allow(dead_code)]

use async_trait::async_trait;
use catalog::app::{AppState, build_router};
use catalog::model::CatalogRecord;
use catalog::store::{Repository, StoreError, StoreResult};
use std::sync::Arc;

pub type TestApp = axum::routing::RouterIntoService<axum::body::Body, ()>;

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub fn app_with_state(state: AppState) -> TestApp {
    build_router(state).into_service()
}

pub fn empty_app() -> TestApp {
    app_with_state(AppState::in_memory())
}

/// App whose repositories fail every call.
pub fn failing_app() -> TestApp {
    app_with_state(AppState::new(
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
    ))
}

/// App whose repositories panic on every call.
pub fn panicking_app() -> TestApp {
    app_with_state(AppState::new(
        Arc::new(PanickingRepository),
        Arc::new(PanickingRepository),
    ))
}

pub struct FailingRepository;

fn storage_failure() -> StoreError {
    StoreError::Unexpected(anyhow::anyhow!("collection unavailable"))
}

#[async_trait]
impl<T: CatalogRecord> Repository<T> for FailingRepository {
    async fn list(&self) -> StoreResult<Vec<T>> {
        Err(storage_failure())
    }

    async fn get(&self, _id: &str) -> StoreResult<Option<T>> {
        Err(storage_failure())
    }

    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<T>> {
        Err(storage_failure())
    }

    async fn insert(&self, _record: T) -> StoreResult<T> {
        Err(storage_failure())
    }

    async fn replace(&self, _record: T) -> StoreResult<T> {
        Err(storage_failure())
    }

    async fn remove(&self, _id: &str) -> StoreResult<()> {
        Err(storage_failure())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(storage_failure())
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

pub struct PanickingRepository;

#[async_trait]
impl<T: CatalogRecord> Repository<T> for PanickingRepository {
    async fn list(&self) -> StoreResult<Vec<T>> {
        panic!("{} list wedged", T::KIND)
    }

    async fn get(&self, _id: &str) -> StoreResult<Option<T>> {
        panic!("{} get wedged", T::KIND)
    }

    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<T>> {
        panic!("{} find_by_name wedged", T::KIND)
    }

    async fn insert(&self, _record: T) -> StoreResult<T> {
        panic!("{} insert wedged", T::KIND)
    }

    async fn replace(&self, _record: T) -> StoreResult<T> {
        panic!("{} replace wedged", T::KIND)
    }

    async fn remove(&self, _id: &str) -> StoreResult<()> {
        panic!("{} remove wedged", T::KIND)
    }

    async fn health_check(&self) -> StoreResult<()> {
        panic!("{} health_check wedged", T::KIND)
    }

    fn backend_name(&self) -> &'static str {
        "panicking"
    }
}
