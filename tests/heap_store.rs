use heap_store::{HeapStore, DEFAULT_CAPACITY};

fn scenario() -> HeapStore<i32, &'static str> {
    let mut store = HeapStore::new();
    store.enqueue(100, "One Hundred");
    store.enqueue(1, "One");
    store.enqueue(5, "Five");
    store.enqueue(75, "Seventy Five");
    store.enqueue(32, "Thirty Two");
    store.enqueue(64, "Sixty Four");
    store.enqueue(18, "Eighteen");
    store
}

#[test]
fn dequeues_in_descending_priority() {
    let mut store = scenario();
    assert_eq!(store.count(), 7);

    let mut values = vec![];
    let mut priorities = vec![];
    while let Some((p, v)) = store.dequeue() {
        priorities.push(p);
        values.push(v);
    }
    assert_eq!(priorities, vec![100, 75, 64, 32, 18, 5, 1]);
    assert_eq!(values, vec!["One Hundred", "Seventy Five", "Sixty Four", "Thirty Two",
                            "Eighteen", "Five", "One"]);
    assert_eq!(store.count(), 0);
}

#[test]
fn peek_does_not_remove() {
    let store = scenario();
    assert_eq!(store.peek(), Some((&100, &"One Hundred")));
    assert_eq!(store.peek(), Some((&100, &"One Hundred")));
    assert_eq!(store.count(), 7);
}

#[cfg(any(debug_assertions, feature = "dump"))]
#[test]
fn dump_renders_levels() {
    let mut store = scenario();
    assert_eq!(store.dump(),
               "100:One Hundred\n\
                75:Seventy Five, 64:Sixty Four\n\
                1:One, 32:Thirty Two, 5:Five, 18:Eighteen");
    store.dequeue();
    assert_eq!(store.dump(),
               "75:Seventy Five\n\
                32:Thirty Two, 64:Sixty Four\n\
                1:One, 18:Eighteen, 5:Five");
    store.clear();
    assert_eq!(store.dump(), "");
}

#[test]
fn empty_and_cleared_queues_are_empty() {
    let mut store = HeapStore::<u64, String>::new();
    assert_eq!(store.dequeue(), None);
    assert_eq!(store.peek(), None);
    assert_eq!(store.count(), 0);

    store.enqueue(3, "three".to_string());
    store.clear();
    assert_eq!(store.dequeue(), None);
    assert_eq!(store.peek(), None);
    assert_eq!(store.count(), 0);
}

#[test]
fn clear_then_enqueue_matches_fresh_store() {
    let mut cleared = scenario();
    cleared.extend((200..260).map(|p| (p, "filler")));
    cleared.clear();
    cleared.enqueue(42, "answer");

    let mut fresh = HeapStore::new();
    fresh.enqueue(42, "answer");

    assert_eq!(cleared.count(), fresh.count());
    assert_eq!(cleared.capacity(), fresh.capacity());
    assert_eq!(cleared.capacity(), DEFAULT_CAPACITY);
    assert_eq!(format!("{:?}", cleared), format!("{:?}", fresh));
}

#[test]
fn grows_past_default_capacity() {
    let mut store = HeapStore::new();
    for p in 0..DEFAULT_CAPACITY {
        store.enqueue(p, p);
    }
    assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    store.enqueue(DEFAULT_CAPACITY, DEFAULT_CAPACITY);
    assert!(store.capacity() >= 40);
    assert_eq!(store.peek(), Some((&DEFAULT_CAPACITY, &DEFAULT_CAPACITY)));

    let drained: Vec<usize> = (0..store.count()).filter_map(|_| store.dequeue()).map(|(p, _)| p).collect();
    assert_eq!(drained, (0..DEFAULT_CAPACITY + 1).rev().collect::<Vec<_>>());
}

#[test]
fn shrinks_at_boundary_and_stays_ordered() {
    let mut store = HeapStore::new();
    store.extend((0..41).map(|p| ((p * 37) % 41, ())));
    assert_eq!(store.capacity(), 80);

    while store.count() > 39 {
        assert_eq!(store.capacity(), 80);
        store.dequeue();
    }
    assert_eq!(store.capacity(), 40);

    // Later operations keep working on the smaller store.
    store.enqueue(1000, ());
    store.enqueue(-1, ());
    assert_eq!(store.dequeue(), Some((1000, ())));
    let mut last = i64::max_value();
    while let Some((p, ())) = store.dequeue() {
        assert!(p <= last);
        last = p;
    }
    assert_eq!(last, -1);
}

#[test]
fn custom_comparator_orders_by_key() {
    let mut store = HeapStore::with_comparator(|a: &(u8, u8), b: &(u8, u8)| a.1.cmp(&b.1));
    store.enqueue((9, 1), "low");
    store.enqueue((0, 7), "high");
    store.enqueue((5, 4), "mid");
    assert_eq!(store.dequeue().map(|(_, v)| v), Some("high"));
    assert_eq!(store.dequeue().map(|(_, v)| v), Some("mid"));
    assert_eq!(store.dequeue().map(|(_, v)| v), Some("low"));
}
