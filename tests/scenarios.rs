use kyroheap::{
    HeapConfig, HeapError, PriorityQueue, StableMinHeap, Step, DEFAULT_CAPACITY,
};

/// A value ordered by `priority` only, so equal priorities stay distinguishable.
#[derive(Debug, Clone, Copy)]
struct Job {
    priority: u32,
    id: &'static str,
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Job {}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Job {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

fn job(priority: u32, id: &'static str) -> Job {
    Job { priority, id }
}

#[test]
fn capacity_five_lifecycle() {
    let mut heap = StableMinHeap::new(5).unwrap();
    for j in [job(5, "a"), job(3, "b"), job(3, "c"), job(8, "d"), job(1, "e")] {
        assert!(heap.insert(j));
    }
    assert!(heap.is_full());
    assert_eq!(heap.peek().map(|j| j.priority), Some(1));

    let mut order = Vec::new();
    while let Some(j) = heap.remove() {
        order.push((j.priority, j.id));
    }
    assert_eq!(order, vec![(1, "e"), (3, "b"), (3, "c"), (5, "a"), (8, "d")]);
    assert!(heap.is_empty());
}

#[test]
fn delete_removes_both_duplicates() {
    let mut heap = StableMinHeap::new(5).unwrap();
    for v in [5, 3, 3, 8, 1] {
        heap.insert(v);
    }

    assert!(heap.delete(&3));
    assert_eq!(heap.len(), 3);
    assert!(!heap.contains(&3));

    assert!(!heap.delete(&99));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.into_sorted_vec(), vec![1, 5, 8]);
}

#[test]
fn cursor_fails_after_remove() {
    let mut heap = StableMinHeap::new(5).unwrap();
    for v in [10, 20, 30] {
        heap.insert(v);
    }

    let mut cursor = heap.cursor();
    assert_eq!(heap.remove(), Some(10));

    let err = cursor.try_next(&heap).unwrap_err();
    assert!(err.is_contract_violation());
    assert!(matches!(
        err,
        HeapError::ConcurrentModification { expected: 3, actual: 4 }
    ));
    assert!(matches!(cursor.step(&heap), Step::Invalidated { .. }));
}

#[test]
fn size_accounting_across_operations() {
    let mut heap = StableMinHeap::new(6).unwrap();
    let mut expected = 0usize;

    for v in [4, 4, 1, 7, 4, 2, 9] {
        if heap.insert(v) {
            expected += 1;
        }
    }
    assert_eq!(expected, 6);
    assert_eq!(heap.len(), expected);

    heap.remove();
    expected -= 1;
    assert_eq!(heap.len(), expected);

    assert!(heap.delete(&4));
    expected -= 3;
    assert_eq!(heap.len(), expected);
    assert!(heap.is_valid_heap());

    heap.clear();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
}

#[test]
fn stability_survives_interleaving() {
    let mut heap = StableMinHeap::new(16).unwrap();
    heap.insert(job(2, "first"));
    heap.insert(job(1, "low"));
    heap.insert(job(2, "second"));
    assert_eq!(heap.remove().map(|j| j.id), Some("low"));

    heap.insert(job(2, "third"));
    heap.insert(job(0, "urgent"));
    assert!(heap.delete(&job(0, "any")));

    let ids: Vec<_> = heap.drain_sorted().map(|j| j.id).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn heap_property_holds_after_every_step() {
    let mut heap = StableMinHeap::new(64).unwrap();
    for i in 0..64u32 {
        assert!(heap.insert((i * 37) % 11));
        assert!(heap.is_valid_heap());
    }
    for target in [3, 7, 0] {
        heap.delete(&target);
        assert!(heap.is_valid_heap());
    }
    while heap.remove().is_some() {
        assert!(heap.is_valid_heap());
    }
}

#[test]
fn config_drives_capacity() {
    let config = HeapConfig::from_json(r#"{"capacity": 2}"#).unwrap();
    let mut heap = StableMinHeap::with_config(&config).unwrap();
    assert!(heap.insert('b'));
    assert!(heap.insert('a'));
    assert!(!heap.insert('c'));
    assert_eq!(heap.capacity(), 2);

    let heap: StableMinHeap<char> = StableMinHeap::with_config(&HeapConfig::default()).unwrap();
    assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
}

fn drain_via_trait<Q: PriorityQueue<u16>>(queue: &mut Q) -> Vec<u16> {
    let mut out = Vec::new();
    while let Some(v) = queue.remove() {
        out.push(v);
    }
    out
}

#[test]
fn usable_through_priority_queue_trait() {
    let mut heap = StableMinHeap::new(4).unwrap();
    {
        let queue: &mut dyn PriorityQueue<u16> = &mut heap;
        assert!(queue.insert(9));
        assert!(queue.insert(4));
        assert!(queue.insert(6));
        assert!(queue.contains(&6));
        assert_eq!(queue.peek(), Some(&4));
        assert_eq!(queue.size(), 3);
        assert!(!queue.is_full());
        assert!(queue.delete(&6));
    }
    assert_eq!(drain_via_trait(&mut heap), vec![4, 9]);
    assert!(PriorityQueue::is_empty(&heap));
}
