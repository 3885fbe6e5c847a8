//! The bounded, stable binary min-heap.
//!
//! Storage is a single `Vec` allocated once with room for `capacity` entries.
//! The populated prefix is always dense, and index `i` has children `2i+1` and
//! `2i+2`. Entries carry an insertion sequence, so equal values come out in the
//! order they went in.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{HeapConfig, DEFAULT_CAPACITY};
use crate::cursor::{Cursor, Iter};
use crate::entry::{Entry, Sequence};
use crate::error::{HeapError, HeapResult};
use crate::queue::PriorityQueue;

/// A fixed-capacity minimum priority queue with FIFO ordering among equal values.
///
/// # Examples
///
/// ```
/// use kyroheap::StableMinHeap;
///
/// let mut heap = StableMinHeap::new(5).unwrap();
/// for v in [5, 3, 3, 8, 1] {
///     assert!(heap.insert(v));
/// }
/// assert!(heap.is_full());
/// assert!(!heap.insert(0));
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 3, 5, 8]);
/// ```
pub struct StableMinHeap<E> {
    id: u64,
    entries: Vec<Entry<E>>,
    capacity: usize,
    next_sequence: Sequence,
    modifications: u64,
}

/// Source of heap identities, so cursors can tell which heap created them.
static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

impl<E> StableMinHeap<E> {
    /// Creates an empty heap that can hold up to `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::InvalidCapacity` if `capacity` is zero and
    /// `HeapError::Allocation` if the storage cannot be reserved.
    pub fn new(capacity: usize) -> HeapResult<Self> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity { capacity });
        }
        Self::allocate(capacity)
    }

    /// Creates an empty heap from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::Config` if the configuration does not validate and
    /// `HeapError::Allocation` if the storage cannot be reserved.
    pub fn with_config(config: &HeapConfig) -> HeapResult<Self> {
        config.validate()?;
        Self::allocate(config.capacity)
    }

    fn allocate(capacity: usize) -> HeapResult<Self> {
        let mut entries = Vec::new();
        if let Err(e) = entries.try_reserve_exact(capacity) {
            tracing::debug!(capacity, error = %e, "failed to reserve heap storage");
            return Err(HeapError::Allocation { capacity });
        }
        Ok(Self::from_storage(entries, capacity))
    }

    fn from_storage(entries: Vec<Entry<E>>, capacity: usize) -> Self {
        tracing::debug!(capacity, "allocating stable min-heap");
        Self {
            id: NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed),
            entries,
            capacity,
            next_sequence: Sequence::ZERO,
            modifications: 0,
        }
    }

    /// Maximum number of values the heap can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for [`len`](Self::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `len() == capacity()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Returns the smallest value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.entries.first().map(Entry::value)
    }

    /// Number of structural mutations performed so far.
    ///
    /// Incremented by every successful insert, remove, deleted match, and clear.
    #[must_use]
    pub const fn modification_count(&self) -> u64 {
        self.modifications
    }

    /// Sequence number the next inserted value will receive.
    #[must_use]
    pub const fn next_sequence(&self) -> Sequence {
        self.next_sequence
    }

    /// Removes every value.
    ///
    /// The sequence counter keeps running, so values inserted afterwards still
    /// order after everything inserted before.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.modifications += 1;
        tracing::debug!(dropped, "cleared heap");
    }

    /// Iterates over the values in raw storage order, which is not sorted.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.entries.iter())
    }

    /// Iterates over the stored entries, with their sequence numbers, in raw storage order.
    #[must_use]
    pub fn entries(&self) -> std::slice::Iter<'_, Entry<E>> {
        self.entries.iter()
    }

    /// Creates a detached cursor that fails once the heap is modified.
    ///
    /// Unlike [`iter`](Self::iter), the cursor does not hold a borrow, so the
    /// heap can be mutated while it exists. Stepping it afterwards reports the
    /// modification instead of yielding stale data.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.modifications)
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index).map(Entry::value)
    }
}

impl<E: Ord> StableMinHeap<E> {
    /// Inserts a value. Returns `false` and leaves the heap untouched if it is full.
    pub fn insert(&mut self, value: E) -> bool {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity, "insert rejected: heap is full");
            return false;
        }
        let sequence = self.next_sequence.bump();
        self.entries.push(Entry::new(value, sequence));
        self.sift_up(self.entries.len() - 1);
        self.modifications += 1;
        true
    }

    /// Removes and returns the smallest value, or `None` if the heap is empty.
    ///
    /// Among equal values, the one inserted first is returned.
    pub fn remove(&mut self) -> Option<E> {
        if self.entries.is_empty() {
            return None;
        }
        let root = self.entries.swap_remove(0);
        self.modifications += 1;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(root.into_value())
    }

    /// Removes every value equal to `target`. Returns `true` if at least one was removed.
    ///
    /// Matching ignores sequence numbers. Each removal moves the last entry into
    /// the vacated slot and repairs the heap around it, so the scan costs
    /// O(n + k log n) for k matches.
    pub fn delete(&mut self, target: &E) -> bool {
        let mut removed = 0usize;
        let mut index = 0;
        while index < self.entries.len() {
            if !self.entries[index].matches(target) {
                index += 1;
                continue;
            }

            self.entries.swap_remove(index);
            self.modifications += 1;
            removed += 1;

            // A matching replacement is removed on the next pass without repair.
            if index >= self.entries.len() || self.entries[index].matches(target) {
                continue;
            }

            // If the replacement sank, an unscanned child now sits at `index`.
            // Otherwise only already-scanned ancestors can have moved into it.
            if self.sift_down(index) == index {
                self.sift_up(index);
                index += 1;
            }
        }

        if removed > 0 {
            tracing::debug!(removed, remaining = self.entries.len(), "deleted matching entries");
        }
        removed > 0
    }

    /// Returns `true` if a value equal to `target` is stored. Linear scan.
    #[must_use]
    pub fn contains(&self, target: &E) -> bool {
        self.entries.iter().any(|entry| entry.matches(target))
    }

    /// Consumes the heap and returns its values in removal order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.entries.len());
        while let Some(value) = self.remove() {
            out.push(value);
        }
        out
    }

    /// Removes values in priority order as the iterator is advanced.
    ///
    /// Each step is an ordinary [`remove`](Self::remove). Values not pulled
    /// from the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> impl Iterator<Item = E> + '_ {
        std::iter::from_fn(move || self.remove())
    }

    /// Checks the heap property over the whole storage.
    ///
    /// Every operation keeps this true; it exists for tests and diagnostics.
    #[must_use]
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2] <= self.entries[i])
    }

    /// Moves the entry at `index` towards the root. Returns its final position.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent] > self.entries[index] {
                self.entries.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the entry at `index` towards the leaves. Returns its final position.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left] < self.entries[smallest] {
                smallest = left;
            }
            if right < len && self.entries[right] < self.entries[smallest] {
                smallest = right;
            }

            if smallest == index {
                return index;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<E> Default for StableMinHeap<E> {
    fn default() -> Self {
        Self::from_storage(Vec::with_capacity(DEFAULT_CAPACITY), DEFAULT_CAPACITY)
    }
}

impl<E: fmt::Debug> fmt::Debug for StableMinHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableMinHeap")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("modifications", &self.modifications)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, E> IntoIterator for &'a StableMinHeap<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Ord> PriorityQueue<E> for StableMinHeap<E> {
    fn insert(&mut self, value: E) -> bool {
        Self::insert(self, value)
    }

    fn remove(&mut self) -> Option<E> {
        Self::remove(self)
    }

    fn delete(&mut self, target: &E) -> bool {
        Self::delete(self, target)
    }

    fn peek(&self) -> Option<&E> {
        Self::peek(self)
    }

    fn contains(&self, target: &E) -> bool {
        Self::contains(self, target)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}
