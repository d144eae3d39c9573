//! HTTP API request/response DTOs for the game backend.
//!
//! Wire field naming is camelCase (`maxPlayers`, `playerName`, ...) to match
//! the browser client; snake_case aliases are accepted on requests.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Capacity, HighScore, Room},
    time::timestamp_to_rfc3339,
};

/// Generic operation response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful response without a payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Room representation on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "maxPlayers")]
    pub max_players: usize,
    pub players: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String, // ISO 8601
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            name: room.name.as_str().to_string(),
            max_players: room.capacity.value(),
            players: room
                .players
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            is_active: room.is_active,
        }
    }
}

/// Payload for creating a room
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(rename = "maxPlayers", alias = "max_players")]
    pub max_players: Option<usize>,
}

impl CreateRoomRequest {
    /// Requested capacity, falling back to the default
    pub fn capacity_or_default(&self) -> usize {
        self.max_players.unwrap_or(Capacity::DEFAULT)
    }
}

/// Payload for joining or leaving a room
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRequest {
    #[serde(rename = "playerName", alias = "player_name")]
    pub player_name: String,
}

/// High score representation on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreDto {
    pub id: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub score: u32,
    pub timestamp: String, // ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl From<&HighScore> for HighScoreDto {
    fn from(score: &HighScore) -> Self {
        Self {
            id: score.id.as_str().to_string(),
            player_name: score.player_name.as_str().to_string(),
            score: score.score,
            timestamp: timestamp_to_rfc3339(score.created_at.value()),
            rank: score.rank,
        }
    }
}

/// Payload for recording a high score
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScoreRequest {
    #[serde(rename = "playerName", alias = "player_name")]
    pub player_name: String,
    pub score: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub app_name: String,
}

/// Bulk-clear response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedResponse {
    pub cleared: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerName, RoomName, ScoreId, Timestamp};

    #[test]
    fn test_room_dto_wire_field_names() {
        // テスト項目: RoomDto が camelCase のフィールド名でシリアライズされる
        // given (前提条件):
        let mut room = Room::new(
            crate::domain::RoomId::new("room-1".to_string()).unwrap(),
            RoomName::new("Room 1".to_string()).unwrap(),
            Capacity::new(4).unwrap(),
            Timestamp::new(1704110400000),
        );
        room.add_player(PlayerName::new("Alice".to_string()).unwrap())
            .unwrap();

        // when (操作):
        let json = serde_json::to_value(RoomDto::from(&room)).unwrap();

        // then (期待する結果):
        assert_eq!(json["id"], "room-1");
        assert_eq!(json["maxPlayers"], 4);
        assert_eq!(json["players"], serde_json::json!(["Alice"]));
        assert_eq!(json["isActive"], true);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-01-01"));
    }

    #[test]
    fn test_player_request_accepts_both_naming_styles() {
        // テスト項目: playerName と player_name のどちらの表記も受け付ける
        let camel: PlayerRequest = serde_json::from_str(r#"{"playerName": "Bob"}"#).unwrap();
        let snake: PlayerRequest = serde_json::from_str(r#"{"player_name": "Bob"}"#).unwrap();
        assert_eq!(camel.player_name, "Bob");
        assert_eq!(snake.player_name, "Bob");
    }

    #[test]
    fn test_create_room_request_default_capacity() {
        // テスト項目: maxPlayers 省略時はデフォルト容量になる
        let req: CreateRoomRequest = serde_json::from_str(r#"{"name": "Room 1"}"#).unwrap();
        assert_eq!(req.capacity_or_default(), Capacity::DEFAULT);
    }

    #[test]
    fn test_high_score_dto_rank_omitted_when_none() {
        // テスト項目: rank が未計算のとき、レスポンスに rank フィールドが現れない
        // given (前提条件):
        let score = HighScore::new(
            ScoreId::new("score-1".to_string()).unwrap(),
            PlayerName::new("Alice".to_string()).unwrap(),
            100,
            Timestamp::new(1704110400000),
        );

        // when (操作):
        let json = serde_json::to_value(HighScoreDto::from(&score)).unwrap();

        // then (期待する結果):
        assert!(json.get("rank").is_none());
        assert_eq!(json["playerName"], "Alice");
    }
}
