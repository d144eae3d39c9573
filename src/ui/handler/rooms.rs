//! Lobby room endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    domain::{Capacity, PlayerName, RoomId, RoomName},
    infrastructure::dto::http::{
        ApiResponse, ClearedResponse, CreateRoomRequest, PlayerRequest, RoomDto,
    },
    ui::{error::ApiError, state::AppState},
};

/// Query parameters for the room list endpoint
#[derive(Debug, Deserialize)]
pub struct RoomsListQuery {
    /// Only return active rooms (default: true)
    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

/// Get all rooms, newest first
pub async fn get_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomsListQuery>,
) -> Result<Json<Vec<RoomDto>>, ApiError> {
    let rooms = state.rooms.list(query.active_only).await?;
    Ok(Json(rooms.iter().map(RoomDto::from).collect()))
}

/// Create a new room
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), ApiError> {
    let name =
        RoomName::new(payload.name.clone()).map_err(|e| ApiError::validation("body", "name", &e))?;
    let capacity = Capacity::new(payload.capacity_or_default())
        .map_err(|e| ApiError::validation("body", "maxPlayers", &e))?;

    let room = state.rooms.create(name, capacity).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Room created successfully",
            RoomDto::from(&room),
        )),
    ))
}

/// Get a specific room by ID
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDto>, ApiError> {
    let id = parse_room_id(room_id)?;
    match state.rooms.get(&id).await? {
        Some(room) => Ok(Json(RoomDto::from(&room))),
        None => Err(ApiError::NotFound("Room not found".to_string())),
    }
}

/// Join a room
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(payload): Json<PlayerRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError> {
    let id = parse_room_id(room_id)?;
    let player = PlayerName::new(payload.player_name)
        .map_err(|e| ApiError::validation("body", "playerName", &e))?;

    let room = state.rooms.join(&id, player.clone()).await?;
    Ok(Json(ApiResponse::ok(
        format!("Player {player} joined room successfully"),
        RoomDto::from(&room),
    )))
}

/// Leave a room
pub async fn leave_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(payload): Json<PlayerRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError> {
    let id = parse_room_id(room_id)?;
    let player = PlayerName::new(payload.player_name)
        .map_err(|e| ApiError::validation("body", "playerName", &e))?;

    let room = state.rooms.leave(&id, &player).await?;
    Ok(Json(ApiResponse::ok(
        format!("Player {player} left room successfully"),
        RoomDto::from(&room),
    )))
}

/// Close a room (stop accepting joins)
pub async fn close_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError> {
    let id = parse_room_id(room_id)?;
    let room = state.rooms.close(&id).await?;
    Ok(Json(ApiResponse::ok(
        "Room closed successfully",
        RoomDto::from(&room),
    )))
}

/// Delete a room
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError> {
    let id = parse_room_id(room_id)?;
    if !state.rooms.delete(&id).await? {
        return Err(ApiError::NotFound("Room not found".to_string()));
    }
    Ok(Json(ApiResponse::ok_empty("Room deleted successfully")))
}

/// Delete all rooms
pub async fn clear_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearedResponse>, ApiError> {
    let cleared = state.rooms.clear_all().await?;
    Ok(Json(ClearedResponse { cleared }))
}

// Path segments are never empty, so a parse failure can only mean the ID
// cannot address any stored room.
fn parse_room_id(raw: String) -> Result<RoomId, ApiError> {
    RoomId::new(raw).map_err(|_| ApiError::NotFound("Room not found".to_string()))
}
