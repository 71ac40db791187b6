use thiserror::Error;

use crate::domain::ItemId;
use crate::store::StoreError;

/// Errors that can occur during staff operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("Too many concurrent updates, gave up after {attempts} attempts")]
    ConflictRetryExhausted { attempts: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}
