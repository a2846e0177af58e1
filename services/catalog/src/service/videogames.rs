//! Video-game service.
use super::{ServiceError, ServiceResult, reject};
use crate::model::{VideoGame, VideoGamePayload};
use crate::store::{Repository, StoreError, StoreResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const CREATE_VIDEOGAME_NAME_TAKEN: &str = "CREATE_VIDEOGAME_NAME_TAKEN";
pub const UPDATE_VIDEOGAME_NOT_FOUND: &str = "UPDATE_VIDEOGAME_NOT_FOUND";
pub const UPDATE_VIDEOGAME_NAME_TAKEN: &str = "UPDATE_VIDEOGAME_NAME_TAKEN";
pub const DELETE_VIDEOGAME_NOT_FOUND: &str = "DELETE_VIDEOGAME_NOT_FOUND";

pub struct VideoGameService {
    repo: Arc<dyn Repository<VideoGame>>,
    writes: Mutex<()>,
}

impl VideoGameService {
    pub fn new(repo: Arc<dyn Repository<VideoGame>>) -> Self {
        Self {
            repo,
            writes: Mutex::new(()),
        }
    }

    pub async fn get_all(&self) -> StoreResult<Vec<VideoGame>> {
        self.repo.list().await
    }

    /// `None` when no record has `id`.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<VideoGame>> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: VideoGamePayload) -> ServiceResult<VideoGame> {
        let _guard = self.writes.lock().await;
        if self.repo.find_by_name(&payload.name).await?.is_some() {
            return Err(reject(CREATE_VIDEOGAME_NAME_TAKEN));
        }
        let record = VideoGame::from_payload(Uuid::new_v4().to_string(), payload);
        match self.repo.insert(record).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, name = %created.name, "video game created");
                Ok(created)
            }
            Err(StoreError::Conflict(_)) => Err(reject(CREATE_VIDEOGAME_NAME_TAKEN)),
            Err(err) => Err(ServiceError::Unexpected(err)),
        }
    }

    pub async fn update(&self, id: &str, payload: VideoGamePayload) -> ServiceResult<VideoGame> {
        let _guard = self.writes.lock().await;
        let Some(mut record) = self.repo.get(id).await? else {
            return Err(reject(UPDATE_VIDEOGAME_NOT_FOUND));
        };
        if let Some(holder) = self.repo.find_by_name(&payload.name).await? {
            if holder.id != id {
                return Err(reject(UPDATE_VIDEOGAME_NAME_TAKEN));
            }
        }
        record.apply(payload);
        match self.repo.replace(record).await {
            Ok(updated) => {
                tracing::debug!(id = %updated.id, name = %updated.name, "video game updated");
                Ok(updated)
            }
            Err(StoreError::NotFound(_)) => Err(reject(UPDATE_VIDEOGAME_NOT_FOUND)),
            Err(err) => Err(ServiceError::Unexpected(err)),
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let _guard = self.writes.lock().await;
        match self.repo.remove(id).await {
            Ok(()) => {
                tracing::debug!(%id, "video game deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(reject(DELETE_VIDEOGAME_NOT_FOUND)),
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
    use crate::store::memory::InMemoryRepository;
    use crate::store::testing::RacingRepository;

    fn service() -> VideoGameService {
        VideoGameService::new(Arc::new(InMemoryRepository::<VideoGame>::new()))
    }

    fn payload(name: &str, gamesystem: &str, year: i32) -> VideoGamePayload {
        VideoGamePayload {
            name: name.to_string(),
            developer: "Square".to_string(),
            gamesystem: gamesystem.to_string(),
            genre: "Rol".to_string(),
            year,
            image: String::new(),
        }
    }

    fn rejected_code(err: ServiceError) -> String {
        match err {
            ServiceError::Rejected(message) => message.message,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let svc = service();
        let created = svc
            .create(payload("Chrono Trigger", "Nintendo Super NES", 1995))
            .await
            .expect("create");
        let fetched = svc
            .get_by_id(&created.id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(fetched, created);
        assert_eq!(fetched.year, 1995);
        assert_eq!(fetched.gamesystem, "Nintendo Super NES");
    }

    #[tokio::test]
    async fn gamesystem_reference_is_free_text() {
        let svc = service();
        svc.create(payload("Homebrew Quest", "Not A Real Console", 2024))
            .await
            .expect("unknown system accepted");
    }

    #[tokio::test]
    async fn duplicate_names_conflict_on_create_and_update() {
        let svc = service();
        let ct = svc
            .create(payload("Chrono Trigger", "Nintendo Super NES", 1995))
            .await
            .expect("chrono");
        let ff = svc
            .create(payload("Final Fantasy VI", "Nintendo Super NES", 1994))
            .await
            .expect("ff");

        let err = svc
            .create(payload("Chrono Trigger", "Sony PlayStation", 1999))
            .await
            .expect_err("create duplicate");
        assert_eq!(rejected_code(err), CREATE_VIDEOGAME_NAME_TAKEN);

        let err = svc
            .update(&ff.id, payload("Chrono Trigger", "Nintendo Super NES", 1994))
            .await
            .expect_err("update duplicate");
        assert_eq!(rejected_code(err), UPDATE_VIDEOGAME_NAME_TAKEN);

        let updated = svc
            .update(&ct.id, payload("Chrono Trigger", "Sony PlayStation", 1999))
            .await
            .expect("own name");
        assert_eq!(updated.id, ct.id);
        assert_eq!(updated.year, 1999);
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let svc = service();
        assert!(svc.get_by_id("AAAA1").await.expect("get").is_none());
        let err = svc
            .update("AAAA1", payload("Chrono Cross", "Sony PlayStation", 1999))
            .await
            .expect_err("update missing");
        assert_eq!(rejected_code(err), UPDATE_VIDEOGAME_NOT_FOUND);
        let err = svc.delete("AAAA1").await.expect_err("delete missing");
        assert_eq!(rejected_code(err), DELETE_VIDEOGAME_NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_get_is_absent() {
        let svc = service();
        let created = svc
            .create(payload("Secret of Mana", "Nintendo Super NES", 1993))
            .await
            .expect("create");
        svc.delete(&created.id).await.expect("delete");
        assert!(svc.get_by_id(&created.id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn writes_that_lose_a_race_are_rejected() {
        let existing = VideoGame::from_payload(
            "AAAA1".to_string(),
            payload("Chrono Trigger", "Nintendo Super NES", 1995),
        );
        let svc = VideoGameService::new(Arc::new(RacingRepository {
            records: InMemoryRepository::with_records(vec![existing.clone()]),
        }));

        let err = svc
            .create(payload("Panzer Dragoon", "Sega Saturn", 1995))
            .await
            .expect_err("insert conflict");
        assert_eq!(rejected_code(err), CREATE_VIDEOGAME_NAME_TAKEN);

        let err = svc
            .update(&existing.id, payload("Chrono Trigger DS", "Nintendo DS", 2008))
            .await
            .expect_err("replaced concurrently");
        assert_eq!(rejected_code(err), UPDATE_VIDEOGAME_NOT_FOUND);

        let err = svc
            .delete(&existing.id)
            .await
            .expect_err("removed concurrently");
        assert_eq!(rejected_code(err), DELETE_VIDEOGAME_NOT_FOUND);
    }
}
