//! High score endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    domain::{PlayerName, ScoreId},
    infrastructure::dto::http::{ApiResponse, ClearedResponse, CreateScoreRequest, HighScoreDto},
    ui::{
        error::{ApiError, FieldError},
        state::AppState,
    },
};

/// Default number of scores returned by the list endpoint
const DEFAULT_LIMIT: usize = 10;
/// Maximum accepted value for the `limit` query parameter
const MAX_LIMIT: usize = 100;

/// Query parameters for the score list endpoint
#[derive(Debug, Deserialize)]
pub struct ScoresListQuery {
    /// Maximum number of scores to return (default: 10, max: 100)
    pub limit: Option<usize>,
}

/// Get high scores sorted by score descending, ranks over the full set
pub async fn get_highscores(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScoresListQuery>,
) -> Result<Json<Vec<HighScoreDto>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 1 || limit > MAX_LIMIT {
        return Err(ApiError::Validation(vec![FieldError {
            loc: vec!["query".to_string(), "limit".to_string()],
            msg: format!("limit must be between 1 and {MAX_LIMIT} (got {limit})"),
        }]));
    }

    let scores = state.scores.list(Some(limit)).await?;
    Ok(Json(scores.iter().map(HighScoreDto::from).collect()))
}

/// Record a new high score
pub async fn create_highscore(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateScoreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HighScoreDto>>), ApiError> {
    let player = PlayerName::new(payload.player_name)
        .map_err(|e| ApiError::validation("body", "playerName", &e))?;

    let score = state.scores.add(player, payload.score).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "High score added successfully",
            HighScoreDto::from(&score),
        )),
    ))
}

/// Get a specific high score by ID
pub async fn get_highscore(
    State(state): State<Arc<AppState>>,
    Path(score_id): Path<String>,
) -> Result<Json<HighScoreDto>, ApiError> {
    let id = ScoreId::new(score_id)
        .map_err(|_| ApiError::NotFound("Score not found".to_string()))?;
    match state.scores.get(&id).await? {
        Some(score) => Ok(Json(HighScoreDto::from(&score))),
        None => Err(ApiError::NotFound("Score not found".to_string())),
    }
}

/// Get the highest score
pub async fn get_top_score(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HighScoreDto>, ApiError> {
    match state.scores.top().await? {
        Some(score) => Ok(Json(HighScoreDto::from(&score))),
        None => Err(ApiError::NotFound("No scores found".to_string())),
    }
}

/// Delete all high scores
pub async fn clear_highscores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearedResponse>, ApiError> {
    let cleared = state.scores.clear_all().await?;
    Ok(Json(ClearedResponse { cleared }))
}
