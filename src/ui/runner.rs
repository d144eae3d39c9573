//! Server assembly and lifecycle.

use std::sync::Arc;

use crate::{
    config::Settings,
    domain::{RoomRepository, ScoreRepository},
    infrastructure::{
        repository::{InMemoryRoomRepository, InMemoryScoreRepository},
        storage::JsonFileStore,
    },
    usecase::{RoomsService, ScoresService},
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Build the shared application state from settings.
///
/// With persistence enabled, repositories load their JSON mirrors once here.
pub async fn build_state(settings: Settings) -> Arc<AppState> {
    let rooms_repository: Arc<dyn RoomRepository> = if settings.persist_to_disk {
        Arc::new(InMemoryRoomRepository::with_store(JsonFileStore::new(settings.rooms_path())).await)
    } else {
        Arc::new(InMemoryRoomRepository::new())
    };
    let scores_repository: Arc<dyn ScoreRepository> = if settings.persist_to_disk {
        Arc::new(
            InMemoryScoreRepository::with_store(JsonFileStore::new(settings.scores_path())).await,
        )
    } else {
        Arc::new(InMemoryScoreRepository::new())
    };

    Arc::new(AppState {
        rooms: RoomsService::new(rooms_repository),
        scores: ScoresService::new(scores_repository),
        settings,
    })
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting {} v{}", settings.app_name, settings.app_version);
    tracing::info!("Environment: {}", settings.environment);
    tracing::info!(
        "Storage: {}",
        if settings.persist_to_disk { "Disk" } else { "Memory" }
    );

    let addr = format!("{}:{}", settings.host, settings.port);
    let state = build_state(settings).await;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
