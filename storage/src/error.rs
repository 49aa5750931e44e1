//! Storage error types.
//!
//! Surfaced to the engine as [`ActbotError::Session`].

use actbot_core::ActbotError;
use thiserror::Error;

/// Errors that can occur when reading or writing stored sessions.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Corrupt session for user {user_id}: {reason}")]
    Corrupt { user_id: i64, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for ActbotError {
    fn from(e: StorageError) -> Self {
        ActbotError::Session(e.to_string())
    }
}
