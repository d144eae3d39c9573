//! インメモリ Repository 実装
//!
//! HashMap / Vec をインメモリ DB として使用し、設定に応じて
//! フラットな JSON ファイルへミラーリングします。

pub mod rooms;
pub mod scores;

pub use rooms::InMemoryRoomRepository;
pub use scores::InMemoryScoreRepository;
