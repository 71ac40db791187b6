use serde::{Deserialize, Serialize};

use super::ItemId;

/// Represents an item on the canteen menu together with its daily stock counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Maximum units sellable in the current period.
    pub total_limit: u32,
    /// Units already committed against `total_limit`.
    #[serde(default)]
    pub current_ordered: u32,
    /// Staff override that disables sales regardless of remaining capacity.
    #[serde(default)]
    pub manual_sold_out: bool,
}

/// What a student sees for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available { remaining: u32 },
    SoldOut,
    Unavailable,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        total_limit: u32,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            category: category.into(),
            price,
            total_limit,
            current_ordered: 0,
            manual_sold_out: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.total_limit.saturating_sub(self.current_ordered)
    }

    pub fn availability(&self) -> Availability {
        if self.manual_sold_out {
            Availability::Unavailable
        } else {
            match self.remaining() {
                0 => Availability::SoldOut,
                remaining => Availability::Available { remaining },
            }
        }
    }
}
