use std::sync::Arc;

use tracing::{error, info, instrument};

use super::{CanteenConfig, SystemError};
use crate::clock::Clock;
use crate::domain::MenuItem;
use crate::reservation::ReservationService;
use crate::staff::StaffClient;
use crate::store::{StoreActor, StoreClient};

/// The running canteen: the store actor plus the clients wired to it.
pub struct CanteenSystem {
    pub store: StoreClient,
    pub reservations: ReservationService,
    pub staff: StaffClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CanteenSystem {
    /// Spawns the store actor and builds the clients. Must be called inside a
    /// tokio runtime.
    #[instrument(name = "canteen_system", skip_all)]
    pub fn start(config: &CanteenConfig, clock: Arc<dyn Clock>) -> Self {
        info!("Starting canteen system");

        let (store_actor, store) = StoreActor::new(config.channel_capacity, config.event_capacity);
        let handles = vec![tokio::spawn(store_actor.run())];

        let reservations = ReservationService::new(store.clone(), config.retry.clone(), clock)
            .with_ordering_window(config.ordering_window);
        let staff = StaffClient::new(store.clone(), config.retry.clone());

        info!("Canteen system started");

        Self {
            store,
            reservations,
            staff,
            handles,
        }
    }

    /// Inserts menu items; fails on the first duplicate id.
    #[instrument(skip_all, fields(items = items.len()))]
    pub async fn seed_menu(&self, items: Vec<MenuItem>) -> Result<usize, SystemError> {
        let count = items.len();
        for item in items {
            self.store.insert_item(item).await?;
        }
        info!(count, "Menu seeded");
        Ok(count)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down canteen system");

        self.store.shutdown().await?;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("Canteen system shutdown complete");
        Ok(())
    }
}
