use thiserror::Error;

use super::ConfigError;
use crate::staff::StaffError;
use crate::store::StoreError;

/// Errors raised while starting, seeding or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Staff(#[from] StaffError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
