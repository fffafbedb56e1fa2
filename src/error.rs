use std::collections::TryReserveError;
use thiserror::Error;

/// Ring buffer construction error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// Capacity must be greater than zero.
    #[error("ring buffer capacity must be greater than zero")]
    Zero,

    /// Slots could not be allocated.
    #[error("cannot allocate ring buffer slots: {0}")]
    Alloc(#[from] TryReserveError),
}

/// `Semaphore::release` error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("readiness counter overflow: limit of {limit} permits reached")]
pub struct OverflowError {
    /// Maximum number of permits the semaphore can hold.
    pub limit: usize,
}
