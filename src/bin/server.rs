//! Key Dash Adventure backend server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin keydash-server
//! ```

use std::path::PathBuf;

use clap::Parser;

use keydash_backend::{config::Settings, logger::setup_logger, run_server};

/// Backend API server for Key Dash Adventure
#[derive(Debug, Parser)]
#[command(name = "keydash-server", version)]
struct Args {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Storage directory for the JSON mirrors (overrides STORAGE_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep all state in memory only
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let mut settings = Settings::from_env();
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        settings.storage_dir = data_dir;
    }
    if args.no_persist {
        settings.persist_to_disk = false;
    }

    // Run the server
    if let Err(e) = run_server(settings).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
