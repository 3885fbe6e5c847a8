//! Heap configuration.

use serde::{Deserialize, Serialize};

use crate::entry::Sequence;
use crate::error::ConfigError;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Largest capacity any heap can be configured with.
///
/// Every entry carries a [`Sequence`], so no buffer of more entries than this
/// fits in the address space an allocation may span.
#[allow(clippy::cast_sign_loss)]
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Sequence>();

/// Construction parameters for a [`StableMinHeap`](crate::StableMinHeap).
///
/// Missing fields fall back to their defaults when deserialized:
///
/// ```
/// use kyroheap::HeapConfig;
///
/// let config = HeapConfig::from_json("{}").unwrap();
/// assert_eq!(config.capacity, kyroheap::DEFAULT_CAPACITY);
///
/// let config = HeapConfig::from_json(r#"{"capacity": 16}"#).unwrap();
/// assert_eq!(config.capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Maximum number of entries the heap can hold. Fixed for the heap's lifetime.
    pub capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HeapConfig {
    /// Creates a configuration with the given capacity.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the configuration describes a usable heap.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCapacity` if `capacity` is zero and
    /// `ConfigError::CapacityTooLarge` if it exceeds [`MAX_CAPACITY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// the `validate` errors for an unusable capacity.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}
