//! Shared test fixtures for HTTP API integration tests.

use std::net::SocketAddr;

use keydash_backend::{
    config::Settings,
    ui::{build_router, build_state},
};

/// A running server instance bound to an ephemeral port, persistence disabled
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start a fresh server with empty in-memory state
    pub async fn start() -> Self {
        let settings = Settings {
            persist_to_disk: false,
            ..Settings::default()
        };
        let state = build_state(settings).await;
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self { addr }
    }

    /// Base URL of the running server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
