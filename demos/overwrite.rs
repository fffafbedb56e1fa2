use circbuf::{traits::*, HeapRingBuffer};

fn main() {
    let rb = HeapRingBuffer::<i32>::new(3).unwrap();

    assert_eq!(rb.push(0), None);
    assert_eq!(rb.push(1), None);
    assert_eq!(rb.push(2), Some(0));

    assert_eq!(rb.try_get(), Some(1));
    assert_eq!(rb.try_get(), Some(2));
    assert_eq!(rb.try_get(), None);
}
