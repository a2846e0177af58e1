//! Game-system service.
use super::{ServiceError, ServiceResult, reject};
use crate::model::{GameSystem, GameSystemPayload};
use crate::store::{Repository, StoreError, StoreResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const CREATE_GAMESYSTEM_NAME_TAKEN: &str = "CREATE_GAMESYSTEM_NAME_TAKEN";
pub const UPDATE_GAMESYSTEM_NOT_FOUND: &str = "UPDATE_GAMESYSTEM_NOT_FOUND";
pub const UPDATE_GAMESYSTEM_NAME_TAKEN: &str = "UPDATE_GAMESYSTEM_NAME_TAKEN";
pub const DELETE_GAMESYSTEM_NOT_FOUND: &str = "DELETE_GAMESYSTEM_NOT_FOUND";

pub struct GameSystemService {
    repo: Arc<dyn Repository<GameSystem>>,
    writes: Mutex<()>,
}

impl GameSystemService {
    pub fn new(repo: Arc<dyn Repository<GameSystem>>) -> Self {
        Self {
            repo,
            writes: Mutex::new(()),
        }
    }

    pub async fn get_all(&self) -> StoreResult<Vec<GameSystem>> {
        self.repo.list().await
    }

    /// `None` when no record has `id`.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<GameSystem>> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: GameSystemPayload) -> ServiceResult<GameSystem> {
        let _guard = self.writes.lock().await;
        if self.repo.find_by_name(&payload.name).await?.is_some() {
            return Err(reject(CREATE_GAMESYSTEM_NAME_TAKEN));
        }
        let record = GameSystem::from_payload(Uuid::new_v4().to_string(), payload);
        match self.repo.insert(record).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, name = %created.name, "game system created");
                Ok(created)
            }
            Err(StoreError::Conflict(_)) => Err(reject(CREATE_GAMESYSTEM_NAME_TAKEN)),
            Err(err) => Err(ServiceError::Unexpected(err)),
        }
    }

    pub async fn update(&self, id: &str, payload: GameSystemPayload) -> ServiceResult<GameSystem> {
        let _guard = self.writes.lock().await;
        let Some(mut record) = self.repo.get(id).await? else {
            return Err(reject(UPDATE_GAMESYSTEM_NOT_FOUND));
        };
        if let Some(holder) = self.repo.find_by_name(&payload.name).await? {
            if holder.id != id {
                return Err(reject(UPDATE_GAMESYSTEM_NAME_TAKEN));
            }
        }
        record.apply(payload);
        match self.repo.replace(record).await {
            Ok(updated) => {
                tracing::debug!(id = %updated.id, name = %updated.name, "game system updated");
                Ok(updated)
            }
            Err(StoreError::NotFound(_)) => Err(reject(UPDATE_GAMESYSTEM_NOT_FOUND)),
            Err(err) => Err(ServiceError::Unexpected(err)),
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let _guard = self.writes.lock().await;
        match self.repo.remove(id).await {
            Ok(()) => {
                tracing::debug!(%id, "game system deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(reject(DELETE_GAMESYSTEM_NOT_FOUND)),
            Err(err) => Err(ServiceError::Unexpected(err)),
        }
    }

    pub async fn health_check(&self) -> StoreResult<()> {
        self.repo.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::message::build_error_message;
    use crate::store::memory::InMemoryRepository;
    use crate::store::testing::RacingRepository;

    fn service() -> GameSystemService {
        GameSystemService::new(Arc::new(InMemoryRepository::<GameSystem>::new()))
    }

    fn payload(name: &str) -> GameSystemPayload {
        GameSystemPayload {
            name: name.to_string(),
            description: format!("{name} description"),
            image: format!("{name}.png"),
        }
    }

    fn rejected_code(err: ServiceError) -> String {
        match err {
            ServiceError::Rejected(message) => message.message,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() {
        let svc = service();
        let created = svc
            .create(payload("Sega Master System"))
            .await
            .expect("create");
        assert!(!created.id.is_empty());
        let fetched = svc
            .get_by_id(&created.id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let svc = service();
        let first = svc.create(payload("Atari 2600")).await.expect("first");
        let second = svc.create(payload("Atari 7800")).await.expect("second");
        assert_ne!(first.id, second.id);
        assert_eq!(svc.get_all().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn duplicate_name_on_create_is_rejected() {
        let svc = service();
        svc.create(payload("Sega Master System"))
            .await
            .expect("first");
        let err = svc
            .create(payload("Sega Master System"))
            .await
            .expect_err("duplicate");
        match err {
            ServiceError::Rejected(message) => {
                assert_eq!(message, build_error_message(CREATE_GAMESYSTEM_NAME_TAKEN));
            }
            other => panic!("unexpected error {other:?}"),
        }
        // Name matching is case-sensitive.
        svc.create(payload("SEGA MASTER SYSTEM"))
            .await
            .expect("different case");
    }

    #[tokio::test]
    async fn missing_ids_are_not_errors_for_reads() {
        let svc = service();
        assert!(svc.get_by_id("AAAA1").await.expect("get").is_none());

        let err = svc
            .update("AAAA1", payload("Nintendo 64"))
            .await
            .expect_err("update missing");
        assert_eq!(rejected_code(err), UPDATE_GAMESYSTEM_NOT_FOUND);

        let err = svc.delete("AAAA1").await.expect_err("delete missing");
        assert_eq!(rejected_code(err), DELETE_GAMESYSTEM_NOT_FOUND);
    }

    #[tokio::test]
    async fn update_checks_name_against_other_records() {
        let svc = service();
        let snes = svc
            .create(payload("Nintendo Super NES"))
            .await
            .expect("snes");
        let md = svc.create(payload("Sega Mega Drive")).await.expect("md");

        let err = svc
            .update(&md.id, payload("Nintendo Super NES"))
            .await
            .expect_err("name taken");
        assert_eq!(rejected_code(err), UPDATE_GAMESYSTEM_NAME_TAKEN);

        let mut same_name = payload("Nintendo Super NES");
        same_name.description = "Super Famicom abroad".to_string();
        let updated = svc.update(&snes.id, same_name).await.expect("own name");
        assert_eq!(updated.id, snes.id);
        assert_eq!(updated.description, "Super Famicom abroad");

        let listed = svc.get_all().await.expect("list");
        assert_eq!(listed[0], updated);
        assert_eq!(listed[1], md);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let svc = service();
        let created = svc.create(payload("Neo Geo")).await.expect("create");
        svc.delete(&created.id).await.expect("delete");
        assert!(svc.get_by_id(&created.id).await.expect("get").is_none());
        assert!(svc.get_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn writes_that_lose_a_race_are_rejected() {
        let existing = GameSystem::from_payload("AAAA1".to_string(), payload("Nintendo Super NES"));
        let svc = GameSystemService::new(Arc::new(RacingRepository {
            records: InMemoryRepository::with_records(vec![existing.clone()]),
        }));

        let err = svc
            .create(payload("Sega Saturn"))
            .await
            .expect_err("insert conflict");
        assert_eq!(rejected_code(err), CREATE_GAMESYSTEM_NAME_TAKEN);

        let err = svc
            .update(&existing.id, payload("Super Famicom"))
            .await
            .expect_err("replaced concurrently");
        assert_eq!(rejected_code(err), UPDATE_GAMESYSTEM_NOT_FOUND);

        let err = svc
            .delete(&existing.id)
            .await
            .expect_err("removed concurrently");
        assert_eq!(rejected_code(err), DELETE_GAMESYSTEM_NOT_FOUND);
    }
}
