//! # Mock Framework
//!
//! Utilities for testing store clients in isolation.
//!
//! Use [`create_mock_store`] to get a client and the receiving end of its
//! request channel. Then use helpers like [`expect_get_item`] or
//! [`expect_commit`] to assert each request and script the store's reply,
//! including conflicts that are hard to provoke with the real actor.

use tokio::sync::{broadcast, mpsc};

use crate::domain::{ItemId, MenuItem, Order, OrderId};
use crate::store::{DocKey, StoreClient, StoreRequest, StoreResponse, Version, Versioned, Write};

/// Creates a store client whose requests arrive on the returned receiver.
pub fn create_mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(16);
    (StoreClient::new(sender, events), receiver)
}

/// Helper to verify that the next message is a GetItem request
pub async fn expect_get_item(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ItemId, StoreResponse<Option<Versioned<MenuItem>>>)> {
    match receiver.recv().await {
        Some(StoreRequest::GetItem { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetOrder request
pub async fn expect_get_order(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(OrderId, StoreResponse<Option<Versioned<Order>>>)> {
    match receiver.recv().await {
        Some(StoreRequest::GetOrder { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Commit request
pub async fn expect_commit(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Vec<(DocKey, Version)>, Vec<Write>, StoreResponse<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Commit {
            reads,
            writes,
            respond_to,
        }) => Some((reads, writes, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store() {
        let (client, mut receiver) = create_mock_store(10);

        let get_task = tokio::spawn(async move { client.get_item(ItemId::from("5")).await });

        let (id, responder) = expect_get_item(&mut receiver).await.expect("Expected GetItem request");
        assert_eq!(id, ItemId::from("5"));
        let burger = MenuItem::new("5", "Chicken Burger", "Meal", 8.0, 5);
        responder
            .send(Ok(Some(Versioned { version: 3, value: burger.clone() })))
            .unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(Some(Versioned { version: 3, value: burger })));
    }
}
