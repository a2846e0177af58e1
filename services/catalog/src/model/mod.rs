//! Catalog data model module.
//!
//! # Purpose
//! Re-exports the game-system and video-game records, their request payloads,
//! and the `CatalogRecord` trait the storage layer is generic over.
mod gamesystem;
mod videogame;

pub use gamesystem::{GameSystem, GameSystemPayload};
pub use videogame::{VideoGame, VideoGamePayload};

/// A record held in one catalog collection.
///
/// Records are addressed by a server-generated `id` and carry a `name` that is
/// unique within their collection (case-sensitive exact match).
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Label used in logs and metrics for this collection.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
}
