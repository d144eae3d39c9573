//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{RepositoryError, RoomError, ValueObjectError};

/// Errors returned by RoomsService operations
#[derive(Debug, Error)]
pub enum RoomsServiceError {
    /// The addressed room does not exist
    #[error("Room {0} not found")]
    NotFound(String),

    /// A room business rule was violated (full, inactive, membership)
    #[error(transparent)]
    Rule(#[from] RoomError),

    /// A domain value failed validation
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Storage failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors returned by ScoresService operations
#[derive(Debug, Error)]
pub enum ScoresServiceError {
    /// A domain value failed validation
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Storage failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
