//! UseCase: ハイスコア管理
//!
//! スコアの記録と順位付けを実装します。順位は保存されず、読み取りの
//! たびにコレクション全体から計算されます。同点はタイムスタンプの
//! 早い順（実質的に到着順）で決まり、順位は 1 から連番で隙間なく
//! 付与されます。

use std::sync::Arc;

use crate::{
    domain::{HighScore, PlayerName, ScoreId, ScoreIdFactory, ScoreRepository, Timestamp},
    time::now_timestamp_millis,
};

use super::error::ScoresServiceError;

/// Service for recording and ranking high scores
pub struct ScoresService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ScoreRepository>,
}

impl ScoresService {
    /// Create a new ScoresService
    pub fn new(repository: Arc<dyn ScoreRepository>) -> Self {
        Self { repository }
    }

    /// Record a new high score
    pub async fn add(
        &self,
        player_name: PlayerName,
        score: u32,
    ) -> Result<HighScore, ScoresServiceError> {
        let entry = HighScore::new(
            ScoreIdFactory::generate()?,
            player_name,
            score,
            Timestamp::new(now_timestamp_millis()),
        );
        self.repository.insert(entry.clone()).await?;
        tracing::info!(score_id = %entry.id, score = entry.score, "High score recorded");
        Ok(entry)
    }

    /// List scores ordered by score descending, ties broken by earlier
    /// timestamp first, with 1-based contiguous ranks.
    ///
    /// Ranks are always computed over the full set; `limit` truncates the
    /// result afterwards, so a subset still carries full-set ranks.
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<HighScore>, ScoresServiceError> {
        let mut ranked = self.ranked().await?;
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(ranked)
    }

    /// Get a score by ID with its rank computed over the full set
    pub async fn get(&self, id: &ScoreId) -> Result<Option<HighScore>, ScoresServiceError> {
        let ranked = self.ranked().await?;
        Ok(ranked.into_iter().find(|s| &s.id == id))
    }

    /// Get the highest score, or None when no scores exist
    pub async fn top(&self) -> Result<Option<HighScore>, ScoresServiceError> {
        let ranked = self.ranked().await?;
        Ok(ranked.into_iter().next())
    }

    /// Delete all scores; returns the prior count
    pub async fn clear_all(&self) -> Result<usize, ScoresServiceError> {
        let count = self.repository.clear().await?;
        tracing::info!(count, "All scores cleared");
        Ok(count)
    }

    /// Full collection in ranking order with ranks assigned.
    ///
    /// The sort is stable, so entries equal in (score, timestamp) keep the
    /// repository's arrival order.
    async fn ranked(&self) -> Result<Vec<HighScore>, ScoresServiceError> {
        let mut scores = self.repository.list().await?;
        scores.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.created_at.cmp(&b.created_at))
        });
        for (index, score) in scores.iter_mut().enumerate() {
            score.rank = Some(index as u32 + 1);
        }
        Ok(scores)
    }
}
