use std::collections::TryReserveError;

/// Backing store of ring buffer slots.
///
/// Slot count is fixed: it is the capacity of the ring buffer built on top of the storage.
/// Vacant slots hold `None`.
pub trait Storage {
    type Item: Sized;

    fn slots(&self) -> &[Option<Self::Item>];
    fn slots_mut(&mut self) -> &mut [Option<Self::Item>];

    /// Number of slots.
    #[inline]
    fn len(&self) -> usize {
        self.slots().len()
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inline storage with static slot count.
pub struct Array<T, const N: usize> {
    data: [Option<T>; N],
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self {
            data: core::array::from_fn(|_| None),
        }
    }
}

impl<T, const N: usize> Storage for Array<T, N> {
    type Item = T;

    #[inline]
    fn slots(&self) -> &[Option<T>] {
        &self.data
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.data
    }
}

/// Heap-allocated storage, slot count chosen at runtime.
pub struct Heap<T> {
    data: Box<[Option<T>]>,
}

impl<T> Heap<T> {
    /// Allocates `capacity` vacant slots.
    ///
    /// *Panics if allocation failed.*
    pub fn new(capacity: usize) -> Self {
        Self {
            data: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Allocates `capacity` vacant slots returning an error if allocation failed.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let mut vec = Vec::<Option<T>>::new();
        vec.try_reserve_exact(capacity)?;
        vec.resize_with(capacity, || None);
        Ok(Self {
            data: vec.into_boxed_slice(),
        })
    }
}

impl<T> Storage for Heap<T> {
    type Item = T;

    #[inline]
    fn slots(&self) -> &[Option<T>] {
        &self.data
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.data
    }
}
