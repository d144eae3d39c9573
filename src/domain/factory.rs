//! Domain factories for creating identifier value objects.

use super::{
    error::ValueObjectError,
    value_object::{RoomId, ScoreId},
};

/// Factory for generating RoomId instances.
///
/// Encapsulates identifier generation, separating it from the validation
/// logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        RoomId::new(uuid.to_string())
    }
}

/// Factory for generating ScoreId instances.
pub struct ScoreIdFactory;

impl ScoreIdFactory {
    /// Generate a new ScoreId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<ScoreId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        ScoreId::new(uuid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_factory_generate() {
        // テスト項目: RoomIdFactory::generate() で UUID v4 形式の RoomId を生成できる
        // when (操作):
        let result = RoomIdFactory::generate();

        // then (期待する結果):
        assert!(result.is_ok());
        let room_id = result.unwrap();
        assert_eq!(room_id.as_str().len(), 36); // UUID v4 の標準長（ハイフン含む）
    }

    #[test]
    fn test_factory_generate_uniqueness() {
        // テスト項目: generate() は毎回異なる ID を生成する
        // when (操作):
        let room_id1 = RoomIdFactory::generate().unwrap();
        let room_id2 = RoomIdFactory::generate().unwrap();
        let score_id1 = ScoreIdFactory::generate().unwrap();
        let score_id2 = ScoreIdFactory::generate().unwrap();

        // then (期待する結果):
        assert_ne!(room_id1, room_id2);
        assert_ne!(score_id1, score_id2);
    }
}
