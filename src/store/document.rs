use std::fmt;

use crate::domain::{ItemId, MenuItem, Order, OrderId};

/// Document version. Absent documents are version 0; every write bumps it by one.
pub type Version = u64;

pub const ABSENT: Version = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub version: Version,
    pub value: T,
}

/// Address of a document in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocKey {
    Item(ItemId),
    Order(OrderId),
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocKey::Item(id) => write!(f, "items/{}", id),
            DocKey::Order(id) => write!(f, "orders/{}", id),
        }
    }
}

/// A staged write inside a transaction.
#[derive(Debug, Clone)]
pub enum Write {
    PutItem(MenuItem),
    PutOrder(Order),
}

impl Write {
    pub fn key(&self) -> DocKey {
        match self {
            Write::PutItem(item) => DocKey::Item(item.id.clone()),
            Write::PutOrder(order) => DocKey::Order(order.id.clone()),
        }
    }
}
