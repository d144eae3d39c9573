//! Domain layer for the game backend.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{HighScore, Room};
pub use error::{RepositoryError, RoomError, ValueObjectError};
pub use factory::{RoomIdFactory, ScoreIdFactory};
pub use repository::{RoomRepository, ScoreRepository};
pub use value_object::{Capacity, PlayerName, RoomId, RoomName, ScoreId, Timestamp};
