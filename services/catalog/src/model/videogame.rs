//! Video-game records and request payloads.
//!
//! `gamesystem` holds a game-system name as free text; it is not checked
//! against the game-system collection.
use super::CatalogRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct VideoGame {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub gamesystem: String,
    pub genre: String,
    pub year: i32,
    pub image: String,
}

/// Body accepted by `POST /videogames` and `PUT /videogames/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct VideoGamePayload {
    pub name: String,
    pub developer: String,
    pub gamesystem: String,
    pub genre: String,
    pub year: i32,
    pub image: String,
}

impl VideoGame {
    pub fn from_payload(id: String, payload: VideoGamePayload) -> Self {
        Self {
            id,
            name: payload.name,
            developer: payload.developer,
            gamesystem: payload.gamesystem,
            genre: payload.genre,
            year: payload.year,
            image: payload.image,
        }
    }

    pub fn apply(&mut self, payload: VideoGamePayload) {
        self.name = payload.name;
        self.developer = payload.developer;
        self.gamesystem = payload.gamesystem;
        self.genre = payload.genre;
        self.year = payload.year;
        self.image = payload.image;
    }
}

impl CatalogRecord for VideoGame {
    const KIND: &'static str = "videogame";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
