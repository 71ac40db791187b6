//! Converting a student's cart into a committed order without overselling.

pub mod error;
pub mod service;
pub mod session;
pub mod window;

pub use error::*;
pub use service::*;
pub use session::*;
pub use window::*;
