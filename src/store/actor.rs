use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, instrument, warn};

use super::{
    ChangeEvent, DocKey, ResetReport, StoreClient, StoreError, StoreRequest, StoreResponse,
    StoreResult, Version, Versioned, Write, ABSENT,
};
use crate::domain::{ItemId, MenuItem, Order, OrderId};

/// Owns every menu item and order document. Requests are handled strictly one
/// at a time, so a commit is applied in full before the next request is seen.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    items: HashMap<ItemId, Versioned<MenuItem>>,
    orders: HashMap<OrderId, Versioned<Order>>,
    events: broadcast::Sender<ChangeEvent>,
}

impl StoreActor {
    pub fn new(buffer_size: usize, event_capacity: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(event_capacity.max(1));
        let actor = Self {
            receiver,
            items: HashMap::new(),
            orders: HashMap::new(),
            events: events.clone(),
        };
        let client = StoreClient::new(sender, events);
        (actor, client)
    }

    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("StoreActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::GetItem { id, respond_to } => self.handle_get_item(id, respond_to),
                StoreRequest::GetOrder { id, respond_to } => self.handle_get_order(id, respond_to),
                StoreRequest::ListItems { respond_to } => self.handle_list_items(respond_to),
                StoreRequest::ListOrders { day, respond_to } => {
                    self.handle_list_orders(day, respond_to)
                }
                StoreRequest::InsertItem { item, respond_to } => {
                    self.handle_insert_item(item, respond_to)
                }
                StoreRequest::Commit {
                    reads,
                    writes,
                    respond_to,
                } => self.handle_commit(reads, writes, respond_to),
                StoreRequest::ResetDay { respond_to } => self.handle_reset_day(respond_to),
                StoreRequest::Shutdown => {
                    info!("StoreActor shutting down");
                    break;
                }
            }
        }

        info!("StoreActor stopped");
    }

    #[instrument(fields(item_id = %id), skip(self, respond_to))]
    fn handle_get_item(&self, id: ItemId, respond_to: StoreResponse<Option<Versioned<MenuItem>>>) {
        let item = self.items.get(&id).cloned();
        match &item {
            Some(doc) => debug!(version = doc.version, current_ordered = doc.value.current_ordered, "Item read"),
            None => debug!("Item not found"),
        }
        let _ = respond_to.send(Ok(item));
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: OrderId, respond_to: StoreResponse<Option<Versioned<Order>>>) {
        let order = self.orders.get(&id).cloned();
        debug!(found = order.is_some(), "Order read");
        let _ = respond_to.send(Ok(order));
    }

    fn handle_list_items(&self, respond_to: StoreResponse<Vec<MenuItem>>) {
        let mut items: Vec<MenuItem> = self.items.values().map(|doc| doc.value.clone()).collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        let _ = respond_to.send(Ok(items));
    }

    fn handle_list_orders(&self, day: Option<NaiveDate>, respond_to: StoreResponse<Vec<Order>>) {
        let mut orders: Vec<Order> = self
            .orders
            .values()
            .filter(|doc| day.map_or(true, |day| doc.value.day == day))
            .map(|doc| doc.value.clone())
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(fields(item_id = %item.id), skip(self, item, respond_to))]
    fn handle_insert_item(&mut self, item: MenuItem, respond_to: StoreResponse<()>) {
        let result = self.insert_item(item);
        if let Err(e) = &result {
            warn!(error = %e, "Item insert rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(reads = reads.len(), writes = writes.len()), skip_all)]
    fn handle_commit(
        &mut self,
        reads: Vec<(DocKey, Version)>,
        writes: Vec<Write>,
        respond_to: StoreResponse<()>,
    ) {
        let result = self.commit(&reads, writes);
        match &result {
            Ok(()) => debug!("Commit applied"),
            Err(e) => debug!(error = %e, "Commit rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip_all)]
    fn handle_reset_day(&mut self, respond_to: StoreResponse<ResetReport>) {
        let report = self.reset_day();
        info!(
            items_reset = report.items_reset,
            orders_purged = report.orders_purged,
            "Day reset applied"
        );
        let _ = self.events.send(ChangeEvent::DayReset(report));
        let _ = respond_to.send(Ok(report));
    }

    fn version_of(&self, key: &DocKey) -> Version {
        match key {
            DocKey::Item(id) => self.items.get(id).map_or(ABSENT, |doc| doc.version),
            DocKey::Order(id) => self.orders.get(id).map_or(ABSENT, |doc| doc.version),
        }
    }

    fn insert_item(&mut self, item: MenuItem) -> StoreResult<()> {
        let key = DocKey::Item(item.id.clone());
        if self.items.contains_key(&item.id) {
            return Err(StoreError::AlreadyExists(key));
        }
        check_item(&key, &item)?;
        let _ = self.events.send(ChangeEvent::ItemChanged(item.clone()));
        self.items.insert(item.id.clone(), Versioned { version: 1, value: item });
        Ok(())
    }

    /// Validates every read version and every staged write, then applies all
    /// writes. Nothing is applied unless everything passes.
    fn commit(&mut self, reads: &[(DocKey, Version)], writes: Vec<Write>) -> StoreResult<()> {
        for (key, expected) in reads {
            let actual = self.version_of(key);
            if actual != *expected {
                return Err(StoreError::Conflict {
                    key: key.clone(),
                    expected: *expected,
                    actual,
                });
            }
        }

        for write in &writes {
            let key = write.key();
            if !reads.iter().any(|(read, _)| *read == key) {
                return Err(StoreError::BlindWrite(key));
            }
            if let Write::PutItem(item) = write {
                check_item(&key, item)?;
            }
        }

        let mut events = Vec::with_capacity(writes.len());
        for write in writes {
            let version = self.version_of(&write.key()) + 1;
            match write {
                Write::PutItem(item) => {
                    events.push(ChangeEvent::ItemChanged(item.clone()));
                    self.items.insert(item.id.clone(), Versioned { version, value: item });
                }
                Write::PutOrder(order) => {
                    if version == 1 {
                        events.push(ChangeEvent::OrderPlaced(order.clone()));
                    }
                    self.orders.insert(order.id.clone(), Versioned { version, value: order });
                }
            }
        }

        for event in events {
            // No subscribers is fine.
            let _ = self.events.send(event);
        }
        Ok(())
    }

    fn reset_day(&mut self) -> ResetReport {
        for doc in self.items.values_mut() {
            doc.value.current_ordered = 0;
            doc.value.manual_sold_out = false;
            doc.version += 1;
        }
        let orders_purged = self.orders.len();
        self.orders.clear();
        ResetReport {
            items_reset: self.items.len(),
            orders_purged,
        }
    }
}

fn check_item(key: &DocKey, item: &MenuItem) -> StoreResult<()> {
    let reason = if item.current_ordered > item.total_limit {
        format!(
            "current ordered {} exceeds total limit {}",
            item.current_ordered, item.total_limit
        )
    } else if !item.price.is_finite() || item.price < 0.0 {
        format!("invalid price {}", item.price)
    } else {
        return Ok(());
    };
    Err(StoreError::InvalidDocument {
        key: key.clone(),
        reason,
    })
}
