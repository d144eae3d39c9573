//! UseCase: ルーム管理
//!
//! ロビールームの作成・一覧・参加・退出・クローズ・削除を実装します。
//! 参加のルール（満員・非アクティブ・重複参加の拒否）は Domain 層の
//! `Room` エンティティが判定し、ここでは読み取り・変更・保存の流れを
//! 組み立てます。

use std::sync::Arc;

use crate::{
    domain::{Capacity, PlayerName, Room, RoomId, RoomIdFactory, RoomName, RoomRepository, Timestamp},
    time::now_timestamp_millis,
};

use super::error::RoomsServiceError;

/// Service for managing lobby rooms
pub struct RoomsService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RoomsService {
    /// Create a new RoomsService
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Create a new room with a fresh identifier
    pub async fn create(
        &self,
        name: RoomName,
        capacity: Capacity,
    ) -> Result<Room, RoomsServiceError> {
        let room = Room::new(
            RoomIdFactory::generate()?,
            name,
            capacity,
            Timestamp::new(now_timestamp_millis()),
        );
        self.repository.insert(room.clone()).await?;
        tracing::info!(room_id = %room.id, "Room created");
        Ok(room)
    }

    /// List rooms sorted by creation time descending.
    ///
    /// With `active_only`, closed rooms are filtered out.
    pub async fn list(&self, active_only: bool) -> Result<Vec<Room>, RoomsServiceError> {
        let mut rooms = self.repository.list().await?;
        if active_only {
            rooms.retain(|r| r.is_active);
        }
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rooms)
    }

    /// Get a room by ID, or None if absent
    pub async fn get(&self, id: &RoomId) -> Result<Option<Room>, RoomsServiceError> {
        Ok(self.repository.get(id).await?)
    }

    /// Add a player to a room.
    ///
    /// # Errors
    ///
    /// * `RoomsServiceError::NotFound` if the room does not exist
    /// * `RoomsServiceError::Rule` if the room is inactive, full, or the
    ///   player is already present
    pub async fn join(
        &self,
        id: &RoomId,
        player: PlayerName,
    ) -> Result<Room, RoomsServiceError> {
        let mut room = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| RoomsServiceError::NotFound(id.as_str().to_string()))?;
        room.add_player(player)?;
        self.repository.update(room.clone()).await?;
        Ok(room)
    }

    /// Remove a player from a room.
    ///
    /// # Errors
    ///
    /// * `RoomsServiceError::NotFound` if the room does not exist
    /// * `RoomsServiceError::Rule` if the player is not in the room
    pub async fn leave(
        &self,
        id: &RoomId,
        player: &PlayerName,
    ) -> Result<Room, RoomsServiceError> {
        let mut room = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| RoomsServiceError::NotFound(id.as_str().to_string()))?;
        room.remove_player(player)?;
        self.repository.update(room.clone()).await?;
        Ok(room)
    }

    /// Close a room (mark as inactive).
    ///
    /// # Errors
    ///
    /// Returns `RoomsServiceError::NotFound` if the room does not exist
    pub async fn close(&self, id: &RoomId) -> Result<Room, RoomsServiceError> {
        let mut room = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| RoomsServiceError::NotFound(id.as_str().to_string()))?;
        room.close();
        self.repository.update(room.clone()).await?;
        tracing::info!(room_id = %room.id, "Room closed");
        Ok(room)
    }

    /// Delete a room; returns false when absent
    pub async fn delete(&self, id: &RoomId) -> Result<bool, RoomsServiceError> {
        let deleted = self.repository.remove(id).await?;
        if deleted {
            tracing::info!(room_id = %id, "Room deleted");
        }
        Ok(deleted)
    }

    /// Delete all rooms; returns the prior count
    pub async fn clear_all(&self) -> Result<usize, RoomsServiceError> {
        let count = self.repository.clear().await?;
        tracing::info!(count, "All rooms cleared");
        Ok(count)
    }
}
