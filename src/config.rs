//! Index configuration.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Number of buckets used when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Settings for building a [`HashIndex`](crate::index::HashIndex).
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// object is a valid configuration.
///
/// ```
/// use bookshelf::config::{IndexConfig, DEFAULT_CAPACITY};
///
/// let config = IndexConfig::default();
/// assert_eq!(config.capacity, DEFAULT_CAPACITY);
/// assert!(IndexConfig::with_capacity(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of buckets in the index. Fixed for the lifetime of the index.
    pub capacity: usize,
}

impl IndexConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Rejects configurations the index cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CatalogError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
