//! Error types for kyroheap.
//!
//! Expected conditions (full heap, empty heap, no match) are reported through
//! `bool` and `Option` returns. The errors here cover construction problems and
//! contract violations, such as advancing a cursor after the heap changed.

use thiserror::Error;

/// Errors raised while building or validating a [`HeapConfig`](crate::HeapConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        capacity: usize,
    },

    #[error("Capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        capacity: usize,
        max: usize,
    },

    #[error("Failed to parse heap configuration: {message}")]
    Parse {
        message: String,
    },

    #[error("Failed to serialize heap configuration: {message}")]
    Serialize {
        message: String,
    },
}

/// Top-level error type for kyroheap.
#[derive(Debug, Error)]
pub enum HeapError {
    #[error("Invalid heap capacity: {capacity} (must be at least 1)")]
    InvalidCapacity {
        capacity: usize,
    },

    #[error("Failed to reserve storage for {capacity} entries")]
    Allocation {
        capacity: usize,
    },

    #[error("Heap was modified during iteration (expected generation {expected}, found {actual})")]
    ConcurrentModification {
        expected: u64,
        actual: u64,
    },

    #[error("Cursor belongs to a different heap")]
    ForeignCursor,

    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation {
        operation: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HeapError {
    /// Returns true if this error signals misuse of the API rather than bad input.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::ConcurrentModification { .. }
                | Self::ForeignCursor
                | Self::UnsupportedOperation { .. }
        )
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidCapacity { .. })
    }
}

/// Result type alias for kyroheap operations.
pub type HeapResult<T> = Result<T, HeapError>;
