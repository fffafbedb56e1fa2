use crate::{
    error::CapacityError,
    halves::{Cons, Prod},
    rb::RingBuffer,
    semaphore::{Semaphore, StdSemaphore},
    storage::{Array, Heap},
};

#[cfg(feature = "portable-atomic")]
pub use portable_atomic_util::Arc;
#[cfg(not(feature = "portable-atomic"))]
pub use std::sync::Arc;

/// Heap-allocated ring buffer.
pub type HeapRingBuffer<T, X = StdSemaphore> = RingBuffer<Heap<T>, X>;

/// Alias for [`HeapRingBuffer`] pushing half.
pub type HeapProd<T, X = StdSemaphore> = Prod<Arc<HeapRingBuffer<T, X>>>;

/// Alias for [`HeapRingBuffer`] getting half.
pub type HeapCons<T, X = StdSemaphore> = Cons<Arc<HeapRingBuffer<T, X>>>;

/// Ring buffer with inline storage and static capacity.
///
/// *Capacity (`N`) must be greater than zero.*
pub type StaticRingBuffer<T, const N: usize, X = StdSemaphore> = RingBuffer<Array<T, N>, X>;

impl<T, X: Semaphore> RingBuffer<Heap<T>, X> {
    /// Creates a ring buffer with `capacity` slots, able to hold `capacity - 1` items.
    ///
    /// Fails if `capacity` is zero or allocation failed.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        Self::from_storage(Heap::try_new(capacity)?)
    }
}

impl<T, const N: usize, X: Semaphore> Default for RingBuffer<Array<T, N>, X> {
    /// *Panics if `N` is zero.*
    fn default() -> Self {
        match Self::from_storage(Array::default()) {
            Ok(rb) => rb,
            Err(err) => panic!("{}", err),
        }
    }
}
