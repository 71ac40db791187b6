//! # Canteen reservation
//!
//! Students build a cart and place one order per day; staff watch orders come
//! in and toggle stock. Menu items have a daily sales limit, and many students
//! order at once, so placing an order is an optimistic multi-key transaction
//! against a shared document store:
//!
//! - [`store`] - the store actor, its client, transactions and the change feed
//! - [`reservation`] - [`ReservationService::place_order`](reservation::ReservationService::place_order)
//!   and the per-student [`CheckoutSession`](reservation::CheckoutSession)
//! - [`staff`] - sold-out toggles, prices, live orders, summaries, end-of-day reset
//! - [`app_system`] - configuration, tracing, menu seeding, startup and shutdown
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use canteen::app_system::{CanteenConfig, CanteenSystem};
//! # use canteen::clock::SystemClock;
//! # use canteen::domain::{Cart, StudentId};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = CanteenSystem::start(&CanteenConfig::default(), Arc::new(SystemClock));
//! system.seed_menu(canteen::app_system::default_menu()).await?;
//!
//! let student = StudentId::parse("12345").ok_or("bad GR number")?;
//! let cart = Cart::new().with("5", 1).with("1", 2);
//! let order = system.reservations.place_order(&student, &cart).await?;
//! println!("{} costs {:.2}", order.id, order.total_price);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod clock;
pub mod domain;
pub mod reservation;
pub mod staff;
pub mod store;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
