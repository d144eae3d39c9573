//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod rooms;
pub mod scores;

pub use error::{RoomsServiceError, ScoresServiceError};
pub use rooms::RoomsService;
pub use scores::ScoresService;
