//! Abstract priority queue contract.
//!
//! The trait lets generic code (tests, benchmarks, callers that want to swap
//! implementations) depend on the queue operations rather than on
//! [`StableMinHeap`](crate::StableMinHeap) directly.

/// A bounded priority queue that hands out its smallest element first.
///
/// # Contract
/// - `insert` on a full queue returns `false` and changes nothing
/// - `remove` and `peek` on an empty queue return `None` and change nothing
/// - Equal elements are removed in insertion order
pub trait PriorityQueue<E: Ord> {
    /// Inserts a value. Returns `false` if the queue is full.
    fn insert(&mut self, value: E) -> bool;

    /// Removes and returns the smallest value, or `None` if empty.
    fn remove(&mut self) -> Option<E>;

    /// Removes every value equal to `target`. Returns `true` if any was removed.
    fn delete(&mut self, target: &E) -> bool;

    /// Returns the smallest value without removing it.
    fn peek(&self) -> Option<&E>;

    /// Returns `true` if a value equal to `target` is stored.
    fn contains(&self, target: &E) -> bool;

    /// Number of stored values.
    fn size(&self) -> usize;

    /// Removes all values.
    fn clear(&mut self);

    /// Returns `true` if no values are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if no further value can be inserted.
    fn is_full(&self) -> bool;
}
