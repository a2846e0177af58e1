//! Game-system records and request payloads.
use super::CatalogRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct GameSystem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

/// Body accepted by `POST /gamesystems` and `PUT /gamesystems/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct GameSystemPayload {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl GameSystem {
    pub fn from_payload(id: String, payload: GameSystemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            image: payload.image,
        }
    }

    /// Overwrite the mutable fields; `id` is never touched.
    pub fn apply(&mut self, payload: GameSystemPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.image = payload.image;
    }
}

impl CatalogRecord for GameSystem {
    const KIND: &'static str = "gamesystem";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
