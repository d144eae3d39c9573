//! InMemory Score Repository 実装
//!
//! ドメイン層が定義する ScoreRepository trait の具体的な実装。
//! 到着順を保持するために Vec を使用します（同点スコアの順位は
//! 到着順で決まるため、挿入順序が意味を持ちます）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{HighScore, RepositoryError, ScoreId, ScoreRepository},
    infrastructure::storage::JsonFileStore,
};

/// インメモリ Score Repository 実装
pub struct InMemoryScoreRepository {
    // 到着順の Vec。コレクションは小さい前提で ID 検索は線形走査
    scores: Arc<Mutex<Vec<HighScore>>>,
    store: Option<JsonFileStore>,
}

impl InMemoryScoreRepository {
    /// Create a memory-only repository (no persistence)
    pub fn new() -> Self {
        Self {
            scores: Arc::new(Mutex::new(Vec::new())),
            store: None,
        }
    }

    /// Create a repository mirrored to the given JSON file.
    ///
    /// Existing file contents are loaded once at construction, preserving
    /// file order as arrival order. Load failures are logged and the
    /// repository starts empty.
    pub async fn with_store(store: JsonFileStore) -> Self {
        let scores = match store.load::<HighScore>().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %store.path().display(), "Error loading scores: {e}");
                Vec::new()
            }
        };
        Self {
            scores: Arc::new(Mutex::new(scores)),
            store: Some(store),
        }
    }

    /// Mirror the whole collection to disk if persistence is enabled
    async fn persist(&self, scores: &[HighScore]) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(scores).await {
                tracing::warn!(path = %store.path().display(), "Error saving scores: {e}");
            }
        }
    }
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn insert(&self, score: HighScore) -> Result<(), RepositoryError> {
        let mut scores = self.scores.lock().await;
        scores.push(score);
        self.persist(&scores).await;
        Ok(())
    }

    async fn get(&self, id: &ScoreId) -> Result<Option<HighScore>, RepositoryError> {
        let scores = self.scores.lock().await;
        Ok(scores.iter().find(|s| &s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<HighScore>, RepositoryError> {
        let scores = self.scores.lock().await;
        Ok(scores.clone())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let mut scores = self.scores.lock().await;
        let count = scores.len();
        scores.clear();
        self.persist(&scores).await;
        Ok(count)
    }
}
