use crate::{traits::*, HeapRingBuffer};

mod overwrite;

/// Checks that the buffer is empty both by readiness counter and by cursors.
fn assert_drained<T>(rb: &HeapRingBuffer<T>) {
    assert!(rb.is_empty());
    assert_eq!(rb.len(), 0);
    assert_eq!(rb.occupied_len(), 0);
}
