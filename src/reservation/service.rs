use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};

use super::{OrderingWindow, ReservationError};
use crate::clock::Clock;
use crate::domain::{Cart, MenuItem, Order, OrderId, OrderLine, StudentId};
use crate::store::{run_transaction, RetryPolicy, StoreClient, Transaction, TransactionError};

/// Places student orders against the shared store.
///
/// Each call is independent: the service holds no per-student state, so one
/// instance can be cloned into as many request handlers as needed.
#[derive(Clone)]
pub struct ReservationService {
    store: StoreClient,
    retry: RetryPolicy,
    clock: Arc<dyn Clock>,
    window: Option<OrderingWindow>,
}

impl ReservationService {
    pub fn new(store: StoreClient, retry: RetryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            retry,
            clock,
            window: None,
        }
    }

    /// Restricts ordering to the given daily window. `None` accepts orders at any time.
    pub fn with_ordering_window(mut self, window: Option<OrderingWindow>) -> Self {
        self.window = window;
        self
    }

    /// Current menu, for browsing. Not used by [`place_order`](Self::place_order),
    /// which always rereads items inside its transaction.
    pub async fn menu(&self) -> Result<Vec<MenuItem>, ReservationError> {
        Ok(self.store.list_items().await?)
    }

    /// Atomically reserves stock for every cart entry and records the order.
    ///
    /// Either every item's `current_ordered` is raised and the order is created,
    /// or nothing changes. Concurrent modifications are retried according to the
    /// service's [`RetryPolicy`].
    ///
    /// # Errors
    /// - `InvalidCart` if the cart is empty or has a zero quantity
    /// - `OrderingClosed` outside the ordering window
    /// - `AlreadyOrdered` if the student already ordered today
    /// - `ItemNotFound`, `ManuallyDisabled`, `InsufficientStock` for the first
    ///   offending item in cart order
    /// - `ConflictRetryExhausted` when every attempt hit a concurrent modification
    #[instrument(fields(student = %student, entries = cart.entries().len()), skip(self, student, cart))]
    pub async fn place_order(&self, student: &StudentId, cart: &Cart) -> Result<Order, ReservationError> {
        validate_cart(cart)?;

        let now = self.clock.now();
        if let Some(window) = self.window {
            if !window.contains(now.time()) {
                warn!(%window, "Order outside ordering window");
                return Err(ReservationError::OrderingClosed {
                    now: now.time(),
                    window,
                });
            }
        }

        let day = now.date_naive();
        let clock = self.clock.as_ref();
        let result = run_transaction(&self.store, &self.retry, move |tx| {
            reserve(tx, student, cart, day, clock)
        })
        .await;

        match result {
            Ok(order) => {
                info!(order_id = %order.id, total = order.total_price, "Order placed");
                Ok(order)
            }
            Err(TransactionError::Aborted(e)) => {
                warn!(error = %e, "Order rejected");
                Err(e)
            }
            Err(TransactionError::RetriesExhausted { attempts }) => {
                warn!(attempts, "Order abandoned after repeated conflicts");
                Err(ReservationError::ConflictRetryExhausted { attempts })
            }
            Err(TransactionError::Store(e)) => Err(e.into()),
        }
    }
}

fn validate_cart(cart: &Cart) -> Result<(), ReservationError> {
    if cart.is_empty() {
        return Err(ReservationError::InvalidCart("cart is empty".to_string()));
    }
    match cart.entries().iter().find(|entry| entry.quantity == 0) {
        Some(entry) => Err(ReservationError::InvalidCart(format!(
            "quantity for item {} must be at least 1",
            entry.item_id
        ))),
        None => Ok(()),
    }
}

/// One transaction attempt: read the order slot and every item fresh, validate,
/// then stage the counter updates and the order. The order is stamped with
/// this attempt's time; `day` stays the day the order was submitted.
async fn reserve(
    mut tx: Transaction,
    student: &StudentId,
    cart: &Cart,
    day: NaiveDate,
    clock: &dyn Clock,
) -> Result<(Transaction, Order), ReservationError> {
    let order_id = OrderId::for_day(day, student);
    if tx.get_order(&order_id).await?.is_some() {
        return Err(ReservationError::AlreadyOrdered(order_id));
    }

    let mut lines = Vec::with_capacity(cart.entries().len());
    let mut updated = Vec::with_capacity(cart.entries().len());

    for entry in cart.entries() {
        let mut item = tx
            .get_item(&entry.item_id)
            .await?
            .ok_or_else(|| ReservationError::ItemNotFound(entry.item_id.clone()))?;

        check_capacity(&item, entry.quantity)?;

        lines.push(OrderLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity: entry.quantity,
            unit_price: item.price,
        });
        item.current_ordered += entry.quantity;
        updated.push(item);
    }

    for item in updated {
        tx.update_item(item);
    }
    let created_at = clock.now().with_timezone(&Utc);
    let order = Order::place(student.clone(), day, lines, created_at);
    tx.create_order(order.clone());

    Ok((tx, order))
}

fn check_capacity(item: &MenuItem, requested: u32) -> Result<(), ReservationError> {
    if item.manual_sold_out {
        return Err(ReservationError::ManuallyDisabled {
            item_id: item.id.clone(),
            name: item.name.clone(),
        });
    }
    let remaining = item.remaining();
    if requested > remaining {
        return Err(ReservationError::InsufficientStock {
            item_id: item.id.clone(),
            name: item.name.clone(),
            requested,
            remaining,
        });
    }
    Ok(())
}
