//! Core domain models for the game backend.

use serde::{Deserialize, Serialize};

use super::{
    error::RoomError,
    value_object::{Capacity, PlayerName, RoomId, RoomName, ScoreId, Timestamp},
};

/// Represents a multiplayer lobby room with a bounded player list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Display name
    pub name: RoomName,
    /// Maximum number of players allowed
    pub capacity: Capacity,
    /// Player names currently in the room, in join order, each at most once
    pub players: Vec<PlayerName>,
    /// Whether the room still accepts joins
    pub is_active: bool,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new active room with an empty player list
    pub fn new(id: RoomId, name: RoomName, capacity: Capacity, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            capacity,
            players: Vec::new(),
            is_active: true,
            created_at,
        }
    }

    /// Get current player count
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if the room is full (capacity-inclusive)
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity.value()
    }

    /// Check whether a player name is present in the room
    pub fn has_player(&self, player: &PlayerName) -> bool {
        self.players.contains(player)
    }

    /// Add a player to the room
    ///
    /// # Errors
    ///
    /// * `RoomError::Inactive` if the room is closed
    /// * `RoomError::Full` if the room is at capacity
    /// * `RoomError::PlayerAlreadyJoined` if the name is already present
    pub fn add_player(&mut self, player: PlayerName) -> Result<(), RoomError> {
        if !self.is_active {
            return Err(RoomError::Inactive);
        }
        if self.is_full() {
            return Err(RoomError::Full {
                capacity: self.capacity.value(),
            });
        }
        if self.has_player(&player) {
            return Err(RoomError::PlayerAlreadyJoined(player.into_string()));
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove a player from the room
    ///
    /// # Errors
    ///
    /// Returns `RoomError::PlayerNotInRoom` if the name is not present
    pub fn remove_player(&mut self, player: &PlayerName) -> Result<(), RoomError> {
        let before = self.players.len();
        self.players.retain(|p| p != player);
        if self.players.len() == before {
            return Err(RoomError::PlayerNotInRoom(player.as_str().to_string()));
        }
        Ok(())
    }

    /// Mark the room as inactive (closed)
    pub fn close(&mut self) {
        self.is_active = false;
    }
}

/// Represents a recorded high score
///
/// Immutable once created; `rank` is derived at read time and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScore {
    /// Score entry identifier
    pub id: ScoreId,
    /// Name of the player who achieved the score
    pub player_name: PlayerName,
    /// Non-negative score value
    pub score: u32,
    /// Timestamp when the score was recorded
    pub created_at: Timestamp,
    /// 1-based position in the full ranking, recomputed on every read
    #[serde(skip)]
    pub rank: Option<u32>,
}

impl HighScore {
    /// Create a new unranked high score entry
    pub fn new(id: ScoreId, player_name: PlayerName, score: u32, created_at: Timestamp) -> Self {
        Self {
            id,
            player_name,
            score,
            created_at,
            rank: None,
        }
    }
}
