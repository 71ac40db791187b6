use chrono::NaiveDate;

use crate::domain::Order;

/// Units sold of one item, keyed by the name captured in the orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSales {
    pub name: String,
    pub quantity: u32,
}

/// Overview figures for one ordering day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub day: NaiveDate,
    pub total_orders: usize,
    pub total_revenue: f64,
    /// Best sellers first; ties ordered by name.
    pub top_items: Vec<ItemSales>,
}

impl DailySummary {
    /// Summarizes the orders of `day`; orders from other days are ignored.
    pub fn from_orders(day: NaiveDate, orders: &[Order]) -> Self {
        let mut total_orders = 0;
        let mut total_revenue = 0.0;
        let mut top_items: Vec<ItemSales> = Vec::new();

        for order in orders.iter().filter(|order| order.day == day) {
            total_orders += 1;
            total_revenue += order.total_price;
            for line in &order.lines {
                match top_items.iter_mut().find(|sales| sales.name == line.name) {
                    Some(sales) => sales.quantity += line.quantity,
                    None => top_items.push(ItemSales {
                        name: line.name.clone(),
                        quantity: line.quantity,
                    }),
                }
            }
        }

        top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));

        Self {
            day,
            total_orders,
            total_revenue,
            top_items,
        }
    }
}
