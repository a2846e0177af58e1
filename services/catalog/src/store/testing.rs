//! Repository doubles for service tests.
use super::memory::InMemoryRepository;
use super::{Repository, StoreError, StoreResult};
use crate::model::CatalogRecord;
use async_trait::async_trait;

/// Reads come from `records`; every write reports that another writer got
/// there first.
pub(crate) struct RacingRepository<T: CatalogRecord> {
    pub records: InMemoryRepository<T>,
}

#[async_trait]
impl<T: CatalogRecord> Repository<T> for RacingRepository<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        self.records.list().await
    }

    async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        self.records.get(id).await
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<T>> {
        self.records.find_by_name(name).await
    }

    async fn insert(&self, record: T) -> StoreResult<T> {
        Err(StoreError::Conflict(record.id().to_string()))
    }

    async fn replace(&self, record: T) -> StoreResult<T> {
        Err(StoreError::NotFound(record.id().to_string()))
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        Err(StoreError::NotFound(id.to_string()))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "racing"
    }
}
