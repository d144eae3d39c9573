//! HTTP API layer: router, handlers, and server runner.

pub mod error;
pub mod handler;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::{build_state, run_server};
