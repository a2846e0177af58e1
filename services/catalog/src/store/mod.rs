//! Catalog storage abstraction.
//!
//! # Purpose
//! Services depend on `Repository<T>` rather than a concrete collection so the
//! backing store can be swapped (in-memory for tests and local runs, a durable
//! backend elsewhere) without touching service or controller logic.
use crate::helpers::controller::ErrorDetails;
use crate::model::CatalogRecord;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod seed;
#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of one record type.
///
/// `list` returns records in insertion order; `replace` keeps a record's
/// position.
#[async_trait]
pub trait Repository<T: CatalogRecord>: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<T>>;
    async fn get(&self, id: &str) -> StoreResult<Option<T>>;
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<T>>;
    /// Fails with `Conflict` when a record with the same id is present.
    async fn insert(&self, record: T) -> StoreResult<T>;
    /// Fails with `NotFound` when no record has `record.id()`.
    async fn replace(&self, record: T) -> StoreResult<T>;
    /// Fails with `NotFound` when no record has `id`.
    async fn remove(&self, id: &str) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}

impl ErrorDetails for StoreError {
    fn stack(&self) -> Option<String> {
        match self {
            StoreError::Unexpected(err) => err.stack(),
            _ => None,
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            StoreError::Unexpected(err) => err.message(),
            other => Some(other.to_string()),
        }
    }
}
