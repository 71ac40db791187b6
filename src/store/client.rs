use chrono::NaiveDate;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_stream::Stream;
use tracing::{debug, instrument};

use super::{
    change_stream, ChangeEvent, DocKey, ResetReport, StoreError, StoreRequest, StoreResult,
    Version, Versioned, Write,
};
use crate::domain::{ItemId, MenuItem, Order, OrderId};

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => $vis:vis fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            $vis async fn $method(&self, $($param: $param_type),*) -> StoreResult<$return_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| StoreError::ActorCommunicationError("Store actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| StoreError::ActorCommunicationError("Store actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to the [`StoreActor`](super::StoreActor).
///
/// Every ordering student and staff member holds their own clone; all of them
/// talk to the same actor.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
    events: broadcast::Sender<ChangeEvent>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>, events: broadcast::Sender<ChangeEvent>) -> Self {
        Self { sender, events }
    }

    /// Subscribes to committed changes from this point on.
    pub fn changes(&self) -> impl Stream<Item = ChangeEvent> + Send + 'static {
        change_stream(self.events.subscribe())
    }

    /// Sends a commit; callers go through [`Transaction`](super::Transaction).
    #[instrument(fields(reads = reads.len(), writes = writes.len()), skip_all)]
    pub(crate) async fn commit(&self, reads: Vec<(DocKey, Version)>, writes: Vec<Write>) -> StoreResult<()> {
        debug!("Sending commit");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Commit {
                reads,
                writes,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Store actor closed".to_string()))?;

        response
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Store actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> StoreResult<()> {
        debug!("Sending shutdown request");
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Store actor closed".to_string()))
    }
}

client_method!(StoreClient => pub fn get_item(id: ItemId) -> Option<Versioned<MenuItem>> as StoreRequest::GetItem);
client_method!(StoreClient => pub fn get_order(id: OrderId) -> Option<Versioned<Order>> as StoreRequest::GetOrder);
client_method!(StoreClient => pub fn list_items() -> Vec<MenuItem> as StoreRequest::ListItems);
client_method!(StoreClient => pub fn list_orders(day: Option<NaiveDate>) -> Vec<Order> as StoreRequest::ListOrders);
client_method!(StoreClient => pub fn insert_item(item: MenuItem) -> () as StoreRequest::InsertItem);
client_method!(StoreClient => pub fn reset_day() -> ResetReport as StoreRequest::ResetDay);
