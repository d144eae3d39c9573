//! Shared application state.

use crate::{
    config::Settings,
    usecase::{RoomsService, ScoresService},
};

/// Shared application state
pub struct AppState {
    /// Application settings
    pub settings: Settings,
    /// Rooms business logic
    pub rooms: RoomsService,
    /// Scores business logic
    pub scores: ScoresService,
}
