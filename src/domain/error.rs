//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// ScoreId validation error
    #[error("ScoreId cannot be empty")]
    ScoreIdEmpty,

    /// RoomName validation error
    #[error("Room name cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("Room name cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    /// PlayerName validation error
    #[error("Player name cannot be empty")]
    PlayerNameEmpty,

    /// PlayerName too long error
    #[error("Player name cannot exceed {max} characters (got {actual})")]
    PlayerNameTooLong { max: usize, actual: usize },

    /// Capacity out of allowed range error
    #[error("Room capacity must be between {min} and {max} (got {actual})")]
    CapacityOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Room is closed and no longer accepts players
    #[error("Room is not active")]
    Inactive,

    /// Room member count has reached capacity
    #[error("Room is full")]
    Full { capacity: usize },

    /// Player name already present in the room
    #[error("Player {0} already in room")]
    PlayerAlreadyJoined(String),

    /// Player name not present in the room
    #[error("Player {0} not in room")]
    PlayerNotInRoom(String),
}

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage I/O failure
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage (de)serialization failure
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
