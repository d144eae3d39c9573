//! HTTP API endpoint handlers.

pub mod health;
pub mod rooms;
pub mod scores;

// Re-export handlers
pub use health::{health_check, root};
pub use rooms::{
    clear_rooms, close_room, create_room, delete_room, get_room, get_rooms, join_room, leave_room,
};
pub use scores::{clear_highscores, create_highscore, get_highscore, get_highscores, get_top_score};
