use circbuf::{traits::*, HeapRingBuffer};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

fn main() {
    let dropped = Arc::new(AtomicUsize::new(0));
    let rb = HeapRingBuffer::<u32>::new(16).unwrap().with_evict({
        let dropped = dropped.clone();
        move |_| {
            dropped.fetch_add(1, Ordering::Relaxed);
        }
    });
    let (prod, cons) = rb.split();

    let pjh = thread::spawn(move || {
        println!("-> sampling");
        for sample in 0..1000 {
            prod.push(sample);
            if sample % 100 == 0 {
                thread::sleep(Duration::from_millis(1));
            }
        }
        println!("-> done");
    });

    let cjh = thread::spawn(move || {
        let mut received = 0;
        while let Some(sample) = cons.get_timeout(Duration::from_millis(100)) {
            if sample % 100 == 0 {
                println!("<- sample {}", sample);
            }
            received += 1;
        }
        received
    });

    pjh.join().unwrap();
    let received = cjh.join().unwrap();

    println!("{} samples received, {} evicted", received, dropped.load(Ordering::Relaxed));
    assert_eq!(received + dropped.load(Ordering::Relaxed), 1000);
}
