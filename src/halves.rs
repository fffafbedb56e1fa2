use crate::traits::{Getter, Observer, Pusher};
use core::{num::NonZeroUsize, ops::Deref, time::Duration};

/// Pushing half of a shared ring buffer.
///
/// Exposes only [`Pusher`] and [`Observer`] methods of the underlying buffer.
#[derive(Clone, Debug)]
pub struct Prod<R> {
    base: R,
}

/// Getting half of a shared ring buffer.
///
/// Exposes only [`Getter`] and [`Observer`] methods of the underlying buffer.
#[derive(Clone, Debug)]
pub struct Cons<R> {
    base: R,
}

impl<R: Deref> Prod<R>
where
    R::Target: Pusher,
{
    pub fn new(base: R) -> Self {
        Self { base }
    }
    pub fn into_inner(self) -> R {
        self.base
    }
}

impl<R: Deref> Cons<R>
where
    R::Target: Getter,
{
    pub fn new(base: R) -> Self {
        Self { base }
    }
    pub fn into_inner(self) -> R {
        self.base
    }
}

macro_rules! delegate_observer {
    ($type:ident, $bound:ident) => {
        impl<R: Deref> Observer for $type<R>
        where
            R::Target: $bound,
        {
            type Item = <R::Target as Observer>::Item;

            #[inline]
            fn capacity(&self) -> NonZeroUsize {
                self.base.capacity()
            }
            #[inline]
            fn len(&self) -> usize {
                self.base.len()
            }
        }
    };
}

delegate_observer!(Prod, Pusher);
delegate_observer!(Cons, Getter);

impl<R: Deref> Pusher for Prod<R>
where
    R::Target: Pusher,
{
    #[inline]
    fn push(&self, elem: Self::Item) -> Option<Self::Item> {
        self.base.push(elem)
    }
}

impl<R: Deref> Getter for Cons<R>
where
    R::Target: Getter,
{
    #[inline]
    fn wait_ready(&self, timeout: Option<Duration>) -> bool {
        self.base.wait_ready(timeout)
    }
    #[inline]
    fn try_ready(&self) -> bool {
        self.base.try_ready()
    }
    #[inline]
    unsafe fn take_oldest(&self) -> Self::Item {
        self.base.take_oldest()
    }
    #[inline]
    unsafe fn take_newest(&self) -> Self::Item {
        self.base.take_newest()
    }
}
