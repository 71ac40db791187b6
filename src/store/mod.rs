//! In-process document store with optimistic multi-key transactions.
//!
//! A single [`StoreActor`] owns every document and handles requests one at a
//! time. Clients read documents with their versions, stage writes in a
//! [`Transaction`], and commit; the actor applies a commit only if every
//! version read is still current.

pub mod actor;
pub mod client;
pub mod document;
pub mod error;
pub mod events;
pub mod messages;
pub mod transaction;

pub use actor::*;
pub use client::*;
pub use document::*;
pub use error::*;
pub use events::*;
pub use messages::*;
pub use transaction::*;
