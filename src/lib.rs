//! Key Dash Adventure backend library.
//!
//! HTTP backend for the Key Dash Adventure browser game: high score
//! recording/ranking and ephemeral multiplayer lobby rooms.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
