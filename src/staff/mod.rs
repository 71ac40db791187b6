//! Staff-facing operations: stock toggles, live orders and end-of-day reset.

pub mod client;
pub mod error;
pub mod summary;

pub use client::*;
pub use error::*;
pub use summary::*;
