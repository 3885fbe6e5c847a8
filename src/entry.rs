//! Order-tagged heap entries.
//!
//! Every value stored in the heap is paired with the insertion sequence number
//! it was assigned. Entries order by value first and fall back to the sequence
//! number, so equal values leave the heap in the order they entered it.

use std::cmp::Ordering;
use std::fmt;

/// Insertion sequence number.
///
/// Strictly increasing for the lifetime of a heap and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sequence(u64);

impl Sequence {
    /// The first sequence number a heap hands out.
    pub const ZERO: Self = Self(0);

    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns this sequence and advances the counter.
    pub(crate) fn bump(&mut self) -> Self {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stored value together with its insertion sequence.
///
/// Entries are only created by the heap; they cannot be deserialized from
/// outside with an arbitrary sequence:
///
/// ```compile_fail
/// let entry: kyroheap::Entry<i32> =
///     serde_json::from_str(r#"{"value": 1, "sequence": 0}"#).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Entry<E> {
    value: E,
    sequence: Sequence,
}

impl<E> Entry<E> {
    pub(crate) const fn new(value: E, sequence: Sequence) -> Self {
        Self { value, sequence }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> &E {
        &self.value
    }

    /// The sequence number assigned when the value was inserted.
    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Unwraps the value, discarding the sequence.
    #[must_use]
    pub fn into_value(self) -> E {
        self.value
    }
}

impl<E: Ord> Entry<E> {
    /// Compares by value only, ignoring the sequence.
    #[must_use]
    pub fn matches(&self, target: &E) -> bool {
        self.value.cmp(target) == Ordering::Equal
    }
}

impl<E: Ord> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E: Ord> Eq for Entry<E> {}

impl<E: Ord> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<E: fmt::Display> fmt::Display for Entry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
