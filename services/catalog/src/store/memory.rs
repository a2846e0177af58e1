//! In-memory implementation of the catalog repository.
//!
//! # Purpose
//! Holds one collection per record type in a `Vec` guarded by
//! `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: write locks for mutations, read locks for
//!   reads. Each call is atomic on its own; multi-step sequences (check a name,
//!   then insert) must be serialized by the caller.
//!
//! # Performance characteristics
//! Lookups scan the vector. Catalog collections are small and insertion order
//! is part of the listing contract, so a `Vec` is preferred over a map.
//!
//! # Metrics
//! Maintains a `catalog_records` gauge labelled by record kind.
use super::{Repository, StoreError, StoreResult};
use crate::model::CatalogRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InMemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: CatalogRecord> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        record_gauge::<T>(records.len());
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: CatalogRecord> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn record_gauge<T: CatalogRecord>(len: usize) {
    metrics::gauge!("catalog_records", "kind" => T::KIND).set(len as f64);
}

#[async_trait]
impl<T: CatalogRecord> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        // Hand out a copy so callers cannot reach the stored records.
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<T>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.name() == name)
            .cloned())
    }

    async fn insert(&self, record: T) -> StoreResult<T> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::Conflict(format!("{} id exists", T::KIND)));
        }
        records.push(record.clone());
        record_gauge::<T>(records.len());
        Ok(record)
    }

    async fn replace(&self, record: T) -> StoreResult<T> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or_else(|| StoreError::NotFound(T::KIND.into()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(T::KIND.into()))?;
        records.remove(position);
        record_gauge::<T>(records.len());
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
