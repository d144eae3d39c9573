//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用し、永続化が有効な場合は
//! 変更のたびにコレクション全体を JSON ファイルへ書き出します。
//!
//! 書き込みエラーはログに記録した上で無視します。インメモリの状態が
//! 常に正であり、ファイルはベストエフォートのミラーです。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{RepositoryError, Room, RoomId, RoomRepository},
    infrastructure::storage::JsonFileStore,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    rooms: Arc<Mutex<HashMap<String, Room>>>,
    store: Option<JsonFileStore>,
}

impl InMemoryRoomRepository {
    /// Create a memory-only repository (no persistence)
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
            store: None,
        }
    }

    /// Create a repository mirrored to the given JSON file.
    ///
    /// Existing file contents are loaded once at construction. Load failures
    /// are logged and the repository starts empty.
    pub async fn with_store(store: JsonFileStore) -> Self {
        let rooms = match store.load::<Room>().await {
            Ok(items) => items
                .into_iter()
                .map(|room| (room.id.as_str().to_string(), room))
                .collect(),
            Err(e) => {
                tracing::warn!(path = %store.path().display(), "Error loading rooms: {e}");
                HashMap::new()
            }
        };
        Self {
            rooms: Arc::new(Mutex::new(rooms)),
            store: Some(store),
        }
    }

    /// Mirror the whole collection to disk if persistence is enabled
    async fn persist(&self, rooms: &HashMap<String, Room>) {
        if let Some(store) = &self.store {
            let items: Vec<&Room> = rooms.values().collect();
            if let Err(e) = store.save(&items).await {
                tracing::warn!(path = %store.path().display(), "Error saving rooms: {e}");
            }
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.insert(room.id.as_str().to_string(), room);
        self.persist(&rooms).await;
        Ok(())
    }

    async fn get(&self, id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.get(id.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.values().cloned().collect())
    }

    async fn update(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.insert(room.id.as_str().to_string(), room);
        self.persist(&rooms).await;
        Ok(())
    }

    async fn remove(&self, id: &RoomId) -> Result<bool, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let removed = rooms.remove(id.as_str()).is_some();
        if removed {
            self.persist(&rooms).await;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let count = rooms.len();
        rooms.clear();
        self.persist(&rooms).await;
        Ok(count)
    }
}
