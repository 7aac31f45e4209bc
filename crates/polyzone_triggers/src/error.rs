//! Error types for the trigger system

use crate::trigger::TriggerId;
use polyzone_hull::HullError;
use thiserror::Error;

/// Trigger system errors
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The anchors could not be turned into a hull
    #[error("Hull computation failed: {0}")]
    Hull(#[from] HullError),

    /// A trigger with this id is already registered
    #[error("Trigger already registered: {0}")]
    DuplicateId(TriggerId),

    /// No trigger with this id is registered
    #[error("Trigger not found: {0}")]
    NotFound(TriggerId),

    /// A persisted trigger record could not be read or written
    #[error("Invalid trigger record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for trigger operations
pub type Result<T> = std::result::Result<T, TriggerError>;
