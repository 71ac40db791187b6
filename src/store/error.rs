use thiserror::Error;

use super::{DocKey, Version};

/// Errors reported by the document store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Concurrent modification of {key}: read version {expected}, found {actual}")]
    Conflict {
        key: DocKey,
        expected: Version,
        actual: Version,
    },
    #[error("Document already exists: {0}")]
    AlreadyExists(DocKey),
    #[error("Write to {0} was not preceded by a read in the same transaction")]
    BlindWrite(DocKey),
    #[error("Rejected write to {key}: {reason}")]
    InvalidDocument { key: DocKey, reason: String },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
