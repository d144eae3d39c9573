//! Infrastructure layer: repository implementations, storage, and DTOs.

pub mod dto;
pub mod repository;
pub mod storage;
