//! Multiplication options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEAF_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_POOL_CAPACITY};

/// Options for the recursive multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Matrix size at or above which Strassen dispatches its seven
    /// sub-products to the worker pool.
    pub parallel_threshold: usize,
    /// Size at or below which recursion stops and the schoolbook product
    /// takes over.
    pub leaf_size: usize,
    /// Number of worker threads to build the pool with.
    pub pool_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            leaf_size: DEFAULT_LEAF_SIZE,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.leaf_size == 0 {
            self.leaf_size = DEFAULT_LEAF_SIZE;
        }
        if self.pool_capacity == 0 {
            self.pool_capacity = DEFAULT_POOL_CAPACITY;
        }
        self
    }

    /// Same options with a different parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Same options with a different leaf size.
    #[must_use]
    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Whether a Strassen step at `size` should fan out to the pool.
    #[must_use]
    pub fn should_parallelize(&self, size: usize) -> bool {
        size >= self.parallel_threshold
    }
}
