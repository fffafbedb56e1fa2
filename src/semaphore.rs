use crate::{
    error::OverflowError,
    sync::{unpoison, AtomicUsize, Condvar, Mutex, Ordering},
};
use core::time::Duration;
use crossbeam_utils::CachePadded;

pub trait Instant {
    fn now() -> Self;
    fn elapsed(&self) -> Duration;
}

pub use std::time::Instant as StdInstant;

impl Instant for StdInstant {
    fn now() -> Self {
        StdInstant::now()
    }
    fn elapsed(&self) -> Duration {
        StdInstant::elapsed(self)
    }
}

/// Bounded counting semaphore.
///
/// Holds between `0` and `limit` permits. Releasing never waits, acquiring waits until a permit is available.
pub trait Semaphore {
    type Instant: Instant;

    /// Creates semaphore with no permits that can hold at most `limit` of them.
    fn with_limit(limit: usize) -> Self;

    /// Maximum number of permits.
    fn limit(&self) -> usize;

    /// Number of currently available permits.
    ///
    /// *The value may become irrelevant at any time because of concurrent activity.*
    fn available(&self) -> usize;

    /// Takes a permit if there is any.
    fn try_acquire(&self) -> bool;

    /// Waits for a permit and takes it.
    ///
    /// Returns `false` if `timeout` elapsed first. Without `timeout` waits forever and always returns `true`.
    fn acquire(&self, timeout: Option<Duration>) -> bool;

    /// Adds a permit and wakes waiters.
    ///
    /// Fails without waiting if the semaphore already holds `limit` permits.
    fn release(&self) -> Result<(), OverflowError>;
}

/// Semaphore built on atomic counter plus [`Condvar`] for sleeping waiters.
///
/// Uncontended acquire and release touch only the counter; the mutex is taken to park or wake waiters.
pub struct StdSemaphore {
    count: CachePadded<AtomicUsize>,
    limit: usize,
    mutex: Mutex<()>,
    condvar: Condvar,
}

impl Semaphore for StdSemaphore {
    type Instant = StdInstant;

    fn with_limit(limit: usize) -> Self {
        Self {
            count: CachePadded::new(AtomicUsize::new(0)),
            limit,
            mutex: Mutex::new(()),
            condvar: Condvar::new(),
        }
    }

    #[inline]
    fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    fn available(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    fn try_acquire(&self) -> bool {
        let mut count = self.count.load(Ordering::Acquire);
        while count > 0 {
            match self.count.compare_exchange_weak(count, count - 1, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return true,
                Err(actual) => count = actual,
            }
        }
        false
    }

    fn acquire(&self, timeout: Option<Duration>) -> bool {
        if self.try_acquire() {
            return true;
        }
        let mut guard = unpoison(self.mutex.lock());
        for timeout in TimeoutIterator::<Self::Instant>::new(timeout) {
            if self.try_acquire() {
                return true;
            }
            guard = match timeout {
                Some(t) => unpoison(self.condvar.wait_timeout(guard, t)).0,
                None => unpoison(self.condvar.wait(guard)),
            };
        }
        self.try_acquire()
    }

    fn release(&self) -> Result<(), OverflowError> {
        let mut count = self.count.load(Ordering::Acquire);
        loop {
            if count >= self.limit {
                return Err(OverflowError { limit: self.limit });
            }
            match self.count.compare_exchange_weak(count, count + 1, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => break,
                Err(actual) => count = actual,
            }
        }
        // Waiter checks the counter while holding the mutex, so taking it here guarantees the waiter is either
        // not yet checked or already parked.
        let _guard = unpoison(self.mutex.lock());
        self.condvar.notify_all();
        Ok(())
    }
}

/// Yields remaining time of `timeout` on every step until it elapses.
///
/// Without timeout yields `None` forever.
#[derive(Clone, Debug)]
pub(crate) struct TimeoutIterator<I: Instant> {
    start: I,
    timeout: Option<Duration>,
}

impl<I: Instant> TimeoutIterator<I> {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { start: I::now(), timeout }
    }
}

impl<I: Instant> Iterator for TimeoutIterator<I> {
    type Item = Option<Duration>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.timeout {
            Some(dur) => {
                let elapsed = self.start.elapsed();
                if dur > elapsed {
                    Some(Some(dur - elapsed))
                } else {
                    None
                }
            }
            None => Some(None),
        }
    }
}
