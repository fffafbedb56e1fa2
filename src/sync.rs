#[cfg(feature = "loom")]
pub use loom::sync::{
    atomic::{AtomicUsize, Ordering},
    Condvar, Mutex, MutexGuard,
};

#[cfg(all(not(feature = "loom"), feature = "portable-atomic"))]
pub use portable_atomic::{AtomicUsize, Ordering};
#[cfg(all(not(feature = "loom"), not(feature = "portable-atomic")))]
pub use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(not(feature = "loom"))]
pub use std::sync::{Condvar, Mutex, MutexGuard};

use std::sync::{LockResult, PoisonError};

/// Cursors are only moved after every check that can panic, so a poisoned lock still guards consistent data.
#[inline]
pub fn unpoison<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(PoisonError::into_inner)
}
