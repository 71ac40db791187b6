use chrono::NaiveTime;
use thiserror::Error;

use super::OrderingWindow;
use crate::domain::{ItemId, OrderId};
use crate::store::StoreError;

/// Why a reservation attempt was rejected. Nothing is committed in any case.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    #[error("Invalid cart: {0}")]
    InvalidCart(String),
    #[error("Invalid GR number: {0:?}")]
    InvalidIdentity(String),
    #[error("Ordering is closed at {now} (open {window})")]
    OrderingClosed { now: NaiveTime, window: OrderingWindow },
    #[error("An order was already placed today: {0}")]
    AlreadyOrdered(OrderId),
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Insufficient stock for {name}: requested {requested}, remaining {remaining}")]
    InsufficientStock {
        item_id: ItemId,
        name: String,
        requested: u32,
        remaining: u32,
    },
    #[error("{name} is currently unavailable")]
    ManuallyDisabled { item_id: ItemId, name: String },
    #[error("Too many concurrent orders, gave up after {attempts} attempts")]
    ConflictRetryExhausted { attempts: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReservationError {
    /// The item the rejection is about, if any.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            ReservationError::ItemNotFound(id)
            | ReservationError::InsufficientStock { item_id: id, .. }
            | ReservationError::ManuallyDisabled { item_id: id, .. } => Some(id),
            _ => None,
        }
    }
}
