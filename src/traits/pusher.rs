use super::Observer;

/// Pushing part of ring buffer.
pub trait Pusher: Observer {
    /// Appends an item to the ring buffer, never waiting for free space.
    ///
    /// If the buffer is full the oldest item is evicted.
    /// When eviction callback is set it receives evicted item and `None` is returned,
    /// otherwise evicted item is returned to the caller.
    ///
    /// # Panics
    ///
    /// Panics if ring buffer invariants are broken.
    fn push(&self, elem: Self::Item) -> Option<Self::Item>;
}
