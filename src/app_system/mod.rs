//! System orchestration, configuration, startup, and shutdown logic.

pub mod canteen_system;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;

pub use canteen_system::*;
pub use config::*;
pub use error::*;
pub use logging::*;
pub use menu::*;
