use super::Observer;
use core::time::Duration;

/// Taking part of ring buffer.
///
/// Every item taken requires a readiness permit.
/// Permits are added by pushes that do not evict, one per stored item.
pub trait Getter: Observer {
    /// Waits for a readiness permit and takes it.
    ///
    /// Returns `false` if `timeout` elapsed first. Without `timeout` it always returns `true`.
    fn wait_ready(&self, timeout: Option<Duration>) -> bool;

    /// Takes a readiness permit if available, never waits.
    fn try_ready(&self) -> bool;

    /// Removes the oldest item.
    ///
    /// # Safety
    ///
    /// Readiness permit must be taken by [`Self::wait_ready`] or [`Self::try_ready`] before the call, one per item.
    ///
    /// # Panics
    ///
    /// Panics if the ring buffer is empty.
    unsafe fn take_oldest(&self) -> Self::Item;

    /// Removes the newest item.
    ///
    /// # Safety
    ///
    /// Same as for [`Self::take_oldest`].
    ///
    /// # Panics
    ///
    /// Panics if the ring buffer is empty.
    unsafe fn take_newest(&self) -> Self::Item;

    /// Removes the oldest item, waiting until there is one.
    fn get(&self) -> Self::Item {
        let ready = self.wait_ready(None);
        debug_assert!(ready);
        unsafe { self.take_oldest() }
    }

    /// Removes the newest item, waiting until there is one.
    fn pop(&self) -> Self::Item {
        let ready = self.wait_ready(None);
        debug_assert!(ready);
        unsafe { self.take_newest() }
    }

    /// Removes the oldest item.
    ///
    /// Returns `None` if the ring buffer is empty.
    fn try_get(&self) -> Option<Self::Item> {
        if self.try_ready() {
            Some(unsafe { self.take_oldest() })
        } else {
            None
        }
    }

    /// Removes the newest item.
    ///
    /// Returns `None` if the ring buffer is empty.
    fn try_pop(&self) -> Option<Self::Item> {
        if self.try_ready() {
            Some(unsafe { self.take_newest() })
        } else {
            None
        }
    }

    /// Removes the oldest item, waiting at most `timeout` for it to appear.
    fn get_timeout(&self, timeout: Duration) -> Option<Self::Item> {
        if self.wait_ready(Some(timeout)) {
            Some(unsafe { self.take_oldest() })
        } else {
            None
        }
    }

    /// Removes the newest item, waiting at most `timeout` for it to appear.
    fn pop_timeout(&self, timeout: Duration) -> Option<Self::Item> {
        if self.wait_ready(Some(timeout)) {
            Some(unsafe { self.take_newest() })
        } else {
            None
        }
    }
}
