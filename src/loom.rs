use crate::{traits::*, Cons, HeapRingBuffer, Prod};
use loom::{model::Builder, sync::Arc, thread};
use std::vec::Vec;

fn builder() -> Builder {
    let mut builder = Builder::new();
    if builder.preemption_bound.is_none() {
        builder.preemption_bound = Some(3);
    }
    builder
}

#[test]
fn push_get() {
    builder().check(|| {
        let rb = Arc::new(HeapRingBuffer::<i32>::new(3).unwrap());
        let prod = Prod::new(rb.clone());
        let cons = Cons::new(rb.clone());

        let pjh = thread::spawn(move || {
            assert_eq!(prod.push(1), None);
            assert_eq!(prod.push(2), None);
        });

        assert_eq!(cons.get(), 1);
        assert_eq!(cons.get(), 2);
        pjh.join().unwrap();

        assert!(rb.is_empty());
        assert_eq!(rb.occupied_len(), 0);
    });
}

#[test]
fn push_pop() {
    builder().check(|| {
        let rb = Arc::new(HeapRingBuffer::<i32>::new(3).unwrap());
        let prod = Prod::new(rb.clone());
        let cons = Cons::new(rb.clone());

        let pjh = thread::spawn(move || {
            prod.push(1);
        });

        assert_eq!(cons.pop(), 1);
        pjh.join().unwrap();
        assert!(rb.is_empty());
    });
}

#[test]
fn evict_while_getting() {
    builder().check(|| {
        let rb = Arc::new(HeapRingBuffer::<i32>::new(2).unwrap());
        let prod = Prod::new(rb.clone());
        let cons = Cons::new(rb.clone());

        let pjh = thread::spawn(move || [1, 2].into_iter().filter_map(|x| prod.push(x)).collect::<Vec<_>>());

        let got = cons.try_get();
        let evicted = pjh.join().unwrap();
        let rest = cons.try_get();

        let mut all = got.into_iter().chain(evicted).chain(rest).collect::<Vec<_>>();
        all.sort();
        assert_eq!(all, [1, 2]);
        assert_eq!(rb.len(), rb.occupied_len());
    });
}

#[test]
fn two_getters() {
    builder().check(|| {
        let rb = Arc::new(HeapRingBuffer::<i32>::new(3).unwrap());
        let cons = Cons::new(rb.clone());

        let cjh = thread::spawn({
            let cons = cons.clone();
            move || cons.get()
        });

        rb.push(1);
        rb.push(2);
        let mine = cons.get();
        let theirs = cjh.join().unwrap();

        let mut all = [mine, theirs];
        all.sort();
        assert_eq!(all, [1, 2]);
    });
}
