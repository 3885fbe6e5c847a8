//! Read-only views over a heap's storage.
//!
//! [`Iter`] borrows the heap, so the compiler rules out mutation while it is
//! alive. [`Cursor`] holds no borrow; it records which heap created it and that
//! heap's modification count, and refuses to continue once either disagrees.

use std::slice;

use crate::entry::Entry;
use crate::error::{HeapError, HeapResult};
use crate::heap::StableMinHeap;

/// Borrowing iterator over values in raw storage order.
#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    inner: slice::Iter<'a, Entry<E>>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) const fn new(inner: slice::Iter<'a, Entry<E>>) -> Self {
        Self { inner }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

/// Outcome of advancing a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// The next value in storage order.
    Item(T),
    /// Every value has been visited.
    End,
    /// The cursor was created by a different heap.
    ForeignHeap,
    /// The heap changed after the cursor was created.
    Invalidated {
        /// Modification count captured at creation.
        expected: u64,
        /// Modification count observed now.
        actual: u64,
    },
}

impl<T> Step<T> {
    /// Converts the step into a `Result`, turning invalidation into
    /// `HeapError::ConcurrentModification`.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::ConcurrentModification` for `Step::Invalidated` and
    /// `HeapError::ForeignCursor` for `Step::ForeignHeap`.
    pub fn into_result(self) -> HeapResult<Option<T>> {
        match self {
            Self::Item(value) => Ok(Some(value)),
            Self::End => Ok(None),
            Self::ForeignHeap => Err(HeapError::ForeignCursor),
            Self::Invalidated { expected, actual } => {
                Err(HeapError::ConcurrentModification { expected, actual })
            }
        }
    }
}

/// A fail-fast position in a heap's storage.
///
/// Created by [`StableMinHeap::cursor`]. Stepping it over any other heap
/// yields [`Step::ForeignHeap`].
///
/// ```
/// use kyroheap::{Step, StableMinHeap};
///
/// let mut heap = StableMinHeap::new(4).unwrap();
/// heap.insert(2);
/// heap.insert(1);
///
/// let mut cursor = heap.cursor();
/// assert_eq!(cursor.step(&heap), Step::Item(&1));
///
/// heap.insert(0);
/// assert!(matches!(cursor.step(&heap), Step::Invalidated { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    heap_id: u64,
    index: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) const fn new(heap_id: u64, generation: u64) -> Self {
        Self {
            heap_id,
            index: 0,
            generation,
        }
    }

    /// Number of values already yielded.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Modification count captured when the cursor was created.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the cursor.
    pub fn step<'h, E>(&mut self, heap: &'h StableMinHeap<E>) -> Step<&'h E> {
        if let Err(step) = self.check(heap) {
            return step;
        }
        match heap.get(self.index) {
            Some(value) => {
                self.index += 1;
                Step::Item(value)
            }
            None => Step::End,
        }
    }

    /// Returns `true` if another value remains.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::ConcurrentModification` if the heap changed since
    /// the cursor was created, or `HeapError::ForeignCursor` if `heap` is not
    /// the heap that created it.
    pub fn has_next<E>(&self, heap: &StableMinHeap<E>) -> HeapResult<bool> {
        if let Err(step) = self.check(heap) {
            step.into_result()?;
        }
        Ok(self.index < heap.len())
    }

    /// Advances the cursor, returning `Ok(None)` once exhausted.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::ConcurrentModification` if the heap changed since
    /// the cursor was created, or `HeapError::ForeignCursor` if `heap` is not
    /// the heap that created it.
    pub fn try_next<'h, E>(&mut self, heap: &'h StableMinHeap<E>) -> HeapResult<Option<&'h E>> {
        self.step(heap).into_result()
    }

    /// Cursors are read-only; removal through them always fails.
    ///
    /// # Errors
    ///
    /// Always returns `HeapError::UnsupportedOperation`.
    pub fn remove(&mut self) -> HeapResult<()> {
        Err(HeapError::UnsupportedOperation {
            operation: "remove through cursor",
        })
    }

    fn check<'h, E>(&self, heap: &'h StableMinHeap<E>) -> Result<(), Step<&'h E>> {
        if heap.id() != self.heap_id {
            tracing::warn!(position = self.index, "cursor stepped over a heap that did not create it");
            return Err(Step::ForeignHeap);
        }
        let actual = heap.modification_count();
        if actual == self.generation {
            return Ok(());
        }
        tracing::warn!(
            expected = self.generation,
            actual,
            position = self.index,
            "heap modified while a cursor was open"
        );
        Err(Step::Invalidated {
            expected: self.generation,
            actual,
        })
    }
}
