use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

use crate::domain::{MenuItem, Order};

/// Outcome of an end-of-day reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub items_reset: usize,
    pub orders_purged: usize,
}

/// A committed change, published after the store has applied it.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    ItemChanged(MenuItem),
    OrderPlaced(Order),
    DayReset(ResetReport),
}

/// Turns a broadcast subscription into a stream. Lagged subscribers skip the
/// events they missed.
pub fn change_stream(
    receiver: broadcast::Receiver<ChangeEvent>,
) -> impl Stream<Item = ChangeEvent> + Send + 'static {
    BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => Some(event),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            warn!(skipped, "Change feed subscriber lagged");
            None
        }
    })
}
