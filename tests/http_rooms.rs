//! HTTP API integration tests: lobby room endpoints.

mod fixtures;
use fixtures::TestServer;

use serde_json::json;

async fn create_room(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    max_players: u32,
) -> String {
    let response = client
        .post(format!("{base_url}/api/rooms"))
        .json(&json!({ "name": name, "maxPlayers": max_players }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["data"]["id"].as_str().expect("room id").to_string()
}

async fn join(
    client: &reqwest::Client,
    base_url: &str,
    room_id: &str,
    player: &str,
) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/rooms/{room_id}/join"))
        .json(&json!({ "playerName": player }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn test_create_room() {
    // テスト項目: ルームを作成すると 201 とルームデータが返る
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({ "name": "Room 1", "maxPlayers": 4 }))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    let room = &body["data"];
    assert!(room["id"].is_string());
    assert_eq!(room["name"], "Room 1");
    assert_eq!(room["maxPlayers"], 4);
    assert_eq!(room["players"], json!([]));
    assert_eq!(room["isActive"], true);
    assert!(room["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_room_validation() {
    // テスト項目: 空のルーム名や範囲外の容量は 422 になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作) / then (期待する結果):
    for payload in [
        json!({ "name": "   ", "maxPlayers": 4 }),
        json!({ "name": "Room 1", "maxPlayers": 1 }),
        json!({ "name": "Room 1", "maxPlayers": 11 }),
    ] {
        let response = client
            .post(format!("{}/api/rooms", server.base_url()))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 422, "payload: {payload}");
    }
}

#[tokio::test]
async fn test_get_rooms_sorted_newest_first() {
    // テスト項目: ルーム一覧は作成時刻の降順で返る
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    create_room(&client, &server.base_url(), "Oldest", 4).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_room(&client, &server.base_url(), "Newest", 4).await;

    // when (操作):
    let response = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let rooms: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let rooms = rooms.as_array().expect("array");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["name"], "Newest");
    assert_eq!(rooms[1]["name"], "Oldest");
}

#[tokio::test]
async fn test_get_rooms_active_only_filter() {
    // テスト項目: active_only（デフォルト true）でクローズ済みルームが除外される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let closed_id = create_room(&client, &server.base_url(), "Closed", 4).await;
    create_room(&client, &server.base_url(), "Open", 4).await;
    let response = client
        .post(format!("{}/api/rooms/{closed_id}/close", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // when (操作):
    let active: serde_json::Value = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let all: serde_json::Value = client
        .get(format!("{}/api/rooms?active_only=false", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then (期待する結果):
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["name"], "Open");
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_room_not_found() {
    // テスト項目: 存在しないルームの取得は 404 になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/rooms/nonexistent-id", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("not found"));
}

#[tokio::test]
async fn test_join_room() {
    // テスト項目: ルームに参加でき、参加順でプレイヤーが並ぶ
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Room 1", 4).await;

    // when (操作):
    let response = join(&client, &server.base_url(), &room_id, "Alice").await;
    assert_eq!(response.status(), 200);
    let response = join(&client, &server.base_url(), &room_id, "Bob").await;

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["players"], json!(["Alice", "Bob"]));
}

#[tokio::test]
async fn test_join_full_room() {
    // テスト項目: 満員のルームへの参加は 400 になり "full" を含む
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Small Room", 2).await;
    join(&client, &server.base_url(), &room_id, "Alice").await;
    join(&client, &server.base_url(), &room_id, "Bob").await;

    // when (操作):
    let response = join(&client, &server.base_url(), &room_id, "Charlie").await;

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("full"));
}

#[tokio::test]
async fn test_join_room_duplicate_player() {
    // テスト項目: 同じプレイヤー名での二重参加は 400 になり "already" を含む
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Room 1", 4).await;
    join(&client, &server.base_url(), &room_id, "Alice").await;

    // when (操作):
    let response = join(&client, &server.base_url(), &room_id, "Alice").await;

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("already"));
}

#[tokio::test]
async fn test_join_inactive_room() {
    // テスト項目: クローズ済みのルームへの参加は 400 になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Room 1", 4).await;
    client
        .post(format!("{}/api/rooms/{room_id}/close", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // when (操作):
    let response = join(&client, &server.base_url(), &room_id, "Alice").await;

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("active"));
}

#[tokio::test]
async fn test_join_nonexistent_room() {
    // テスト項目: 存在しないルームへの参加は 404 になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = join(&client, &server.base_url(), "nonexistent-id", "Alice").await;

    // then (期待する結果):
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_leave_room() {
    // テスト項目: ルームから退出でき、不在プレイヤーの退出は 400 になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Room 1", 4).await;
    join(&client, &server.base_url(), &room_id, "Alice").await;

    // when (操作):
    let response = client
        .post(format!("{}/api/rooms/{room_id}/leave", server.base_url()))
        .json(&json!({ "playerName": "Alice" }))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["players"], json!([]));

    // when (操作): もう一度退出を試みる
    let response = client
        .post(format!("{}/api/rooms/{room_id}/leave", server.base_url()))
        .json(&json!({ "playerName": "Alice" }))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_delete_room_idempotent_at_boundary() {
    // テスト項目: 削除後の取得は 404、二度目の削除も 404（エラーではなく不在の報告）
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room_id = create_room(&client, &server.base_url(), "Room 1", 4).await;

    // when (操作):
    let first = client
        .delete(format!("{}/api/rooms/{room_id}", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");
    let fetch = client
        .get(format!("{}/api/rooms/{room_id}", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");
    let second = client
        .delete(format!("{}/api/rooms/{room_id}", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(first.status(), 200);
    assert_eq!(fetch.status(), 404);
    assert_eq!(second.status(), 404);
}

#[tokio::test]
async fn test_clear_rooms() {
    // テスト項目: 一括削除は削除前の件数を返し、一覧が空になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    create_room(&client, &server.base_url(), "Room 1", 4).await;
    create_room(&client, &server.base_url(), "Room 2", 4).await;

    // when (操作):
    let response = client
        .delete(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["cleared"], 2);

    let rooms: serde_json::Value = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(rooms.as_array().unwrap().len(), 0);
}
