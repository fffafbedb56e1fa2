use crate::storage::Storage;

/// Slot storage together with read and write cursors.
///
/// One slot is always kept vacant, so `start == pos` unambiguously means empty.
pub(crate) struct Slots<S: Storage> {
    storage: S,
    /// Index of the oldest item.
    start: usize,
    /// Index of the next slot to write.
    pos: usize,
}

impl<S: Storage> Slots<S> {
    pub fn new(storage: S) -> Self {
        debug_assert!(!storage.is_empty());
        Self {
            storage,
            start: 0,
            pos: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.pos
    }

    #[cfg(test)]
    pub fn occupied_len(&self) -> usize {
        let capacity = self.capacity();
        (capacity + self.pos - self.start) % capacity
    }

    /// Stores an item at the write cursor.
    ///
    /// Returns the oldest item if it had to be evicted to keep one slot vacant.
    pub fn write(&mut self, elem: S::Item) -> Option<S::Item> {
        let capacity = self.capacity();
        self.storage.slots_mut()[self.pos] = Some(elem);
        self.pos = (self.pos + 1) % capacity;
        if self.pos == self.start {
            // Length stays the same: one item in, one item out.
            let evicted = self.take_slot(self.start);
            self.start = (self.start + 1) % capacity;
            Some(evicted)
        } else {
            None
        }
    }

    pub fn take_oldest(&mut self) -> S::Item {
        if self.is_empty() {
            panic!("trying to get from empty ring buffer");
        }
        let elem = self.take_slot(self.start);
        self.start = (self.start + 1) % self.capacity();
        elem
    }

    pub fn take_newest(&mut self) -> S::Item {
        if self.is_empty() {
            panic!("trying to pop from empty ring buffer");
        }
        let pos = (self.capacity() + self.pos - 1) % self.capacity();
        let elem = self.take_slot(pos);
        self.pos = pos;
        elem
    }

    fn take_slot(&mut self, index: usize) -> S::Item {
        match self.storage.slots_mut()[index].take() {
            Some(elem) => elem,
            None => panic!("slot {} must hold an item but it is vacant", index),
        }
    }
}
