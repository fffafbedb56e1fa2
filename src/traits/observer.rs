use core::num::NonZeroUsize;

/// Ring buffer observer.
///
/// Can observe ring buffer state but cannot access its data.
pub trait Observer {
    type Item: Sized;

    /// Number of slots in the ring buffer.
    ///
    /// It is constant during the whole ring buffer lifetime.
    fn capacity(&self) -> NonZeroUsize;

    /// The number of items ready to be taken.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of pushers or getters.*
    fn len(&self) -> usize;

    /// Maximum number of items the ring buffer holds at once.
    ///
    /// One slot always stays vacant, so it is `capacity - 1`.
    #[inline]
    fn max_len(&self) -> usize {
        self.capacity().get() - 1
    }

    /// Checks if the ring buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring pusher activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
