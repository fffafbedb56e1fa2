//! Fixed-capacity thread-safe ring buffer.
//!
//! Pushing never waits and evicts the oldest item when the buffer is full.
//! Items are taken either oldest-first ([`Getter::get`](traits::Getter::get)) or newest-first ([`Getter::pop`](traits::Getter::pop)),
//! waiting until there is an item to take.
#![allow(clippy::type_complexity)]

mod alias;
pub mod error;
pub mod halves;
pub mod rb;
pub mod semaphore;
pub mod storage;
mod sync;
mod trace_macro;
pub mod traits;

pub use alias::*;
pub use error::CapacityError;
pub use halves::{Cons, Prod};
pub use rb::RingBuffer;
pub use traits::{Getter, Observer, Pusher};

#[cfg(all(test, not(feature = "loom")))]
mod tests;

#[cfg(all(test, feature = "loom"))]
mod loom;
