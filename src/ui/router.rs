//! Route definitions and middleware stack.

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Settings;

use super::{handler, state::AppState};

/// Build the application router with all routes and middleware
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/rooms",
            get(handler::get_rooms)
                .post(handler::create_room)
                .delete(handler::clear_rooms),
        )
        .route(
            "/rooms/{room_id}",
            get(handler::get_room).delete(handler::delete_room),
        )
        .route("/rooms/{room_id}/join", post(handler::join_room))
        .route("/rooms/{room_id}/leave", post(handler::leave_room))
        .route("/rooms/{room_id}/close", post(handler::close_room))
        .route(
            "/highscores",
            get(handler::get_highscores)
                .post(handler::create_highscore)
                .delete(handler::clear_highscores),
        )
        // static segment takes priority over the {score_id} capture
        .route("/highscores/top/1", get(handler::get_top_score))
        .route("/highscores/{score_id}", get(handler::get_highscore));

    Router::new()
        .route("/", get(handler::root))
        .nest(&state.settings.api_prefix, api)
        .layer(cors_layer(&state.settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer allowing the configured browser origins
fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
