use super::assert_drained;
use crate::{traits::*, HeapRingBuffer};
use std::{
    sync::{Arc, Mutex},
    vec::Vec,
};

#[test]
fn return_evicted() {
    let rb = HeapRingBuffer::<i32>::new(10).unwrap();

    for i in 0..9 {
        assert_eq!(rb.push(i), None);
    }
    assert_eq!(rb.push(9), Some(0));
    assert_eq!(rb.len(), 9);

    for i in 1..10 {
        assert_eq!(rb.get(), i);
    }
    assert_drained(&rb);
}

#[test]
fn evict_callback() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let rb = HeapRingBuffer::<i32>::new(10).unwrap().with_evict({
        let evicted = evicted.clone();
        move |x| evicted.lock().unwrap().push(x)
    });

    for i in 0..10 {
        assert_eq!(rb.push(i), None);
    }
    assert_eq!(*evicted.lock().unwrap(), [0]);

    for i in 1..10 {
        assert_eq!(rb.get(), i);
    }
    assert_drained(&rb);
}

#[test]
fn evict_count_and_order() {
    const CAP: usize = 4;
    const COUNT: usize = 20;
    let rb = HeapRingBuffer::<usize>::new(CAP).unwrap();

    let evicted = (0..COUNT).filter_map(|i| rb.push(i)).collect::<Vec<_>>();
    assert_eq!(evicted.len(), COUNT - (CAP - 1));
    assert_eq!(evicted, (0..COUNT - (CAP - 1)).collect::<Vec<_>>());

    assert_eq!(rb.len(), CAP - 1);
    for i in COUNT - (CAP - 1)..COUNT {
        assert_eq!(rb.get(), i);
    }
    assert_drained(&rb);
}

#[test]
fn pop_after_overflow() {
    let rb = HeapRingBuffer::<i32>::new(4).unwrap();

    let evicted = (0..6).filter_map(|i| rb.push(i)).collect::<Vec<_>>();
    assert_eq!(evicted, [0, 1, 2]);

    assert_eq!(rb.pop(), 5);
    assert_eq!(rb.pop(), 4);
    assert_eq!(rb.pop(), 3);
    assert_drained(&rb);
}

#[test]
fn capacity_one() {
    let rb = HeapRingBuffer::<i32>::new(1).unwrap();
    assert_eq!(rb.max_len(), 0);

    for i in 0..3 {
        assert_eq!(rb.push(i), Some(i));
        assert_drained(&rb);
    }
    assert_eq!(rb.try_get(), None);
}

#[test]
fn set_and_take_evict() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let mut rb = HeapRingBuffer::<i32>::new(2).unwrap();

    assert_eq!(rb.push(0), None);
    assert_eq!(rb.push(1), Some(0));

    rb.set_evict({
        let evicted = evicted.clone();
        move |x| evicted.lock().unwrap().push(x)
    });
    assert_eq!(rb.push(2), None);
    assert_eq!(rb.push(3), None);
    assert_eq!(*evicted.lock().unwrap(), [1, 2]);

    assert!(rb.take_evict().is_some());
    assert_eq!(rb.push(4), Some(3));
    assert_eq!(evicted.lock().unwrap().len(), 2);

    assert_eq!(rb.get(), 4);
    assert_drained(&rb);
}
