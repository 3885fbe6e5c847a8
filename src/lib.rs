//! # kyroheap - A bounded, stable binary min-heap
//!
//! kyroheap provides a fixed-capacity minimum priority queue backed by a single
//! contiguous buffer. Equal values are dequeued in the order they were
//! inserted, and detached cursors detect when the heap changed underneath them.
//!
//! ## Core Concepts
//!
//! - **StableMinHeap**: The heap engine (insert, remove, delete, peek, contains)
//! - **Entry**: A stored value tagged with its insertion `Sequence`
//! - **Cursor**: A fail-fast position that reports concurrent modification
//! - **PriorityQueue**: The abstract queue contract the heap implements
//!
//! ## Usage
//!
//! ```rust
//! use kyroheap::{HeapConfig, StableMinHeap};
//!
//! let mut heap = StableMinHeap::with_config(&HeapConfig::with_capacity(5))?;
//! for v in [5, 3, 3, 8, 1] {
//!     heap.insert(v);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.delete(&3));
//! assert_eq!(heap.len(), 3);
//! # Ok::<(), kyroheap::HeapError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod cursor;
pub mod entry;
pub mod error;
pub mod heap;
pub mod queue;

// Re-export primary types at crate root for convenience
pub use config::{HeapConfig, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use cursor::{Cursor, Iter, Step};
pub use entry::{Entry, Sequence};
pub use error::{ConfigError, HeapError, HeapResult};
pub use heap::StableMinHeap;
pub use queue::PriorityQueue;
