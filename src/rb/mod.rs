mod slots;

use self::slots::Slots;
use crate::{
    alias::Arc,
    error::CapacityError,
    halves::{Cons, Prod},
    semaphore::{Semaphore, StdSemaphore},
    storage::Storage,
    sync::{unpoison, Mutex, MutexGuard},
    trace_macro::rb_trace,
    traits::{Getter, Observer, Pusher},
};
use core::{fmt, num::NonZeroUsize, time::Duration};

/// Eviction callback.
pub type Evict<T> = Box<dyn Fn(T) + Send + Sync>;

/// Fixed-capacity ring buffer that can be shared between threads.
///
/// Pushing never waits: when the buffer is full the oldest item is evicted.
/// Getting and popping wait until there is an item to take.
///
/// Buffer with capacity `N` holds at most `N - 1` items.
///
/// ```
/// use circbuf::{traits::*, HeapRingBuffer};
///
/// let rb = HeapRingBuffer::<i32>::new(3).unwrap();
/// assert_eq!(rb.push(1), None);
/// assert_eq!(rb.push(2), None);
/// assert_eq!(rb.push(3), Some(1));
///
/// assert_eq!(rb.get(), 2);
/// assert_eq!(rb.pop(), 3);
/// assert!(rb.is_empty());
/// ```
pub struct RingBuffer<S: Storage, X: Semaphore = StdSemaphore> {
    capacity: NonZeroUsize,
    slots: Mutex<Slots<S>>,
    /// One permit per stored item.
    ready: X,
    evict: Option<Evict<S::Item>>,
}

impl<S: Storage, X: Semaphore> RingBuffer<S, X> {
    /// Creates an empty ring buffer on top of `storage`.
    ///
    /// Every slot of the storage is treated as vacant.
    pub fn from_storage(storage: S) -> Result<Self, CapacityError> {
        let capacity = NonZeroUsize::new(storage.len()).ok_or(CapacityError::Zero)?;
        Ok(Self {
            capacity,
            slots: Mutex::new(Slots::new(storage)),
            ready: X::with_limit(capacity.get() - 1),
            evict: None,
        })
    }

    /// Sets eviction callback and returns the buffer.
    pub fn with_evict<F: Fn(S::Item) + Send + Sync + 'static>(mut self, evict: F) -> Self {
        self.set_evict(evict);
        self
    }

    /// Sets eviction callback.
    ///
    /// Callback is called synchronously by [`Pusher::push`] with every evicted item.
    /// It is called while the buffer is locked, so evicted items arrive in push order,
    /// and *it must not access the same ring buffer*.
    pub fn set_evict<F: Fn(S::Item) + Send + Sync + 'static>(&mut self, evict: F) {
        self.evict = Some(Box::new(evict));
    }

    /// Removes eviction callback, so that evicted items are returned by [`Pusher::push`] again.
    pub fn take_evict(&mut self) -> Option<Evict<S::Item>> {
        self.evict.take()
    }

    /// Splits the ring buffer into pushing and getting handles.
    ///
    /// Both handles can be cloned and sent to other threads.
    pub fn split(self) -> (Prod<Arc<Self>>, Cons<Arc<Self>>) {
        rb_trace!(capacity = self.capacity.get(), "ring buffer split");
        let arc = Arc::new(self);
        (Prod::new(arc.clone()), Cons::new(arc))
    }

    /// Splits the ring buffer into borrowing pushing and getting handles.
    pub fn split_ref(&self) -> (Prod<&Self>, Cons<&Self>) {
        (Prod::new(self), Cons::new(self))
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, Slots<S>> {
        unpoison(self.slots.lock())
    }

    /// Number of items actually stored, counted by cursors.
    #[cfg(test)]
    pub(crate) fn occupied_len(&self) -> usize {
        self.lock().occupied_len()
    }
}

impl<S: Storage, X: Semaphore> Observer for RingBuffer<S, X> {
    type Item = S::Item;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    #[inline]
    fn len(&self) -> usize {
        self.ready.available()
    }
}

impl<S: Storage, X: Semaphore> Pusher for RingBuffer<S, X> {
    fn push(&self, elem: S::Item) -> Option<S::Item> {
        let mut slots = self.lock();
        match slots.write(elem) {
            Some(evicted) => match &self.evict {
                Some(evict) => {
                    rb_trace!(capacity = self.capacity.get(), "item evicted to callback");
                    evict(evicted);
                    None
                }
                None => {
                    rb_trace!(capacity = self.capacity.get(), "item evicted");
                    Some(evicted)
                }
            },
            None => {
                // Permit limit equals the number of usable slots, so it cannot be reached here.
                if let Err(err) = self.ready.release() {
                    panic!("{}", err);
                }
                None
            }
        }
    }
}

impl<S: Storage, X: Semaphore> Getter for RingBuffer<S, X> {
    fn wait_ready(&self, timeout: Option<Duration>) -> bool {
        let ready = self.ready.acquire(timeout);
        if !ready {
            rb_trace!(?timeout, "waiting for item timed out");
        }
        ready
    }

    #[inline]
    fn try_ready(&self) -> bool {
        self.ready.try_acquire()
    }

    unsafe fn take_oldest(&self) -> S::Item {
        self.lock().take_oldest()
    }

    unsafe fn take_newest(&self) -> S::Item {
        self.lock().take_newest()
    }
}

impl<S: Storage, X: Semaphore> fmt::Debug for RingBuffer<S, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("evict", &self.evict.is_some())
            .finish()
    }
}
