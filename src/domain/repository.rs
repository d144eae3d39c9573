//! Repository traits defined by the domain layer.
//!
//! The usecase layer depends on these traits; concrete implementations live
//! in the infrastructure layer (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{HighScore, Room},
    error::RepositoryError,
    value_object::{RoomId, ScoreId},
};

/// Data access abstraction for lobby rooms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert a newly created room
    async fn insert(&self, room: Room) -> Result<(), RepositoryError>;

    /// Get a room by ID, or None if absent
    async fn get(&self, id: &RoomId) -> Result<Option<Room>, RepositoryError>;

    /// List all rooms in unspecified order
    async fn list(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Replace a stored room with an updated copy
    async fn update(&self, room: Room) -> Result<(), RepositoryError>;

    /// Remove a room by ID; returns false when absent
    async fn remove(&self, id: &RoomId) -> Result<bool, RepositoryError>;

    /// Remove all rooms; returns the prior count
    async fn clear(&self) -> Result<usize, RepositoryError>;
}

/// Data access abstraction for high scores
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Insert a newly recorded score
    async fn insert(&self, score: HighScore) -> Result<(), RepositoryError>;

    /// Get a score by ID, or None if absent
    async fn get(&self, id: &ScoreId) -> Result<Option<HighScore>, RepositoryError>;

    /// List all scores in unspecified order
    async fn list(&self) -> Result<Vec<HighScore>, RepositoryError>;

    /// Remove all scores; returns the prior count
    async fn clear(&self) -> Result<usize, RepositoryError>;
}
