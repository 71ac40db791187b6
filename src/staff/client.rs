use chrono::NaiveDate;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, instrument, warn};

use super::{DailySummary, StaffError};
use crate::domain::{ItemId, MenuItem, Order};
use crate::store::{
    run_transaction, ChangeEvent, ResetReport, RetryPolicy, StoreClient, Transaction,
    TransactionError,
};

/// Client for staff operations on the shared store.
#[derive(Clone)]
pub struct StaffClient {
    store: StoreClient,
    retry: RetryPolicy,
}

impl StaffClient {
    pub fn new(store: StoreClient, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    /// Turns the manual sold-out override on or off. Ordered counts are untouched.
    #[instrument(skip(self))]
    pub async fn set_sold_out(&self, item_id: ItemId, sold_out: bool) -> Result<MenuItem, StaffError> {
        let item = self
            .modify_item(&item_id, |item| {
                item.manual_sold_out = sold_out;
                Ok(())
            })
            .await?;
        info!(item_name = %item.name, sold_out, "Sold-out override updated");
        Ok(item)
    }

    /// Changes the menu price. Orders already placed keep the price they were placed at.
    #[instrument(skip(self))]
    pub async fn update_price(&self, item_id: ItemId, price: f64) -> Result<MenuItem, StaffError> {
        if !price.is_finite() || price < 0.0 {
            return Err(StaffError::InvalidPrice(price));
        }
        let item = self
            .modify_item(&item_id, |item| {
                item.price = price;
                Ok(())
            })
            .await?;
        info!(item_name = %item.name, price, "Price updated");
        Ok(item)
    }

    /// Every item with its ordered count, limit and override flag.
    pub async fn stock_overview(&self) -> Result<Vec<MenuItem>, StaffError> {
        Ok(self.store.list_items().await?)
    }

    /// Orders placed from now on, as they are committed.
    pub fn live_orders(&self) -> impl Stream<Item = Order> + Send + 'static {
        self.store.changes().filter_map(|event| match event {
            ChangeEvent::OrderPlaced(order) => Some(order),
            _ => None,
        })
    }

    #[instrument(skip(self))]
    pub async fn daily_summary(&self, day: NaiveDate) -> Result<DailySummary, StaffError> {
        let orders = self.store.list_orders(Some(day)).await?;
        Ok(DailySummary::from_orders(day, &orders))
    }

    /// Zeroes every ordered count, clears every sold-out override and deletes
    /// all orders, in one step.
    #[instrument(skip(self))]
    pub async fn end_of_day_reset(&self) -> Result<ResetReport, StaffError> {
        let report = self.store.reset_day().await?;
        info!(
            items_reset = report.items_reset,
            orders_purged = report.orders_purged,
            "End-of-day reset complete"
        );
        Ok(report)
    }

    async fn modify_item<F>(&self, item_id: &ItemId, change: F) -> Result<MenuItem, StaffError>
    where
        F: Fn(&mut MenuItem) -> Result<(), StaffError>,
    {
        let change = &change;
        let result = run_transaction(&self.store, &self.retry, move |tx| {
            update_item(tx, item_id, change)
        })
        .await;

        match result {
            Ok(item) => Ok(item),
            Err(TransactionError::Aborted(e)) => Err(e),
            Err(TransactionError::RetriesExhausted { attempts }) => {
                warn!(attempts, "Staff update abandoned after repeated conflicts");
                Err(StaffError::ConflictRetryExhausted { attempts })
            }
            Err(TransactionError::Store(e)) => Err(e.into()),
        }
    }
}

async fn update_item<F>(
    mut tx: Transaction,
    item_id: &ItemId,
    change: &F,
) -> Result<(Transaction, MenuItem), StaffError>
where
    F: Fn(&mut MenuItem) -> Result<(), StaffError>,
{
    let mut item = tx
        .get_item(item_id)
        .await?
        .ok_or_else(|| StaffError::ItemNotFound(item_id.clone()))?;
    let before = item.clone();
    change(&mut item)?;
    // No write for a no-op change.
    if item != before {
        tx.update_item(item.clone());
    }
    Ok((tx, item))
}
