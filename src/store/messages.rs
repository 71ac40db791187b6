use chrono::NaiveDate;
use tokio::sync::oneshot;

use super::{DocKey, ResetReport, StoreError, Version, Versioned, Write};
use crate::domain::{ItemId, MenuItem, Order, OrderId};

pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type StoreResponse<T> = oneshot::Sender<StoreResult<T>>;

/// Typed messages for the store actor. Each variant carries a oneshot channel
/// for the response.
#[derive(Debug)]
pub enum StoreRequest {
    GetItem {
        id: ItemId,
        respond_to: StoreResponse<Option<Versioned<MenuItem>>>,
    },
    GetOrder {
        id: OrderId,
        respond_to: StoreResponse<Option<Versioned<Order>>>,
    },
    ListItems {
        respond_to: StoreResponse<Vec<MenuItem>>,
    },
    ListOrders {
        day: Option<NaiveDate>,
        respond_to: StoreResponse<Vec<Order>>,
    },
    InsertItem {
        item: MenuItem,
        respond_to: StoreResponse<()>,
    },
    Commit {
        reads: Vec<(DocKey, Version)>,
        writes: Vec<Write>,
        respond_to: StoreResponse<()>,
    },
    ResetDay {
        respond_to: StoreResponse<ResetReport>,
    },
    Shutdown,
}
