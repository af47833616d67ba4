//! Linearizer and cache configuration.

/// Settings for a single linearization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearizeConfig {
    /// Maximum number of nested ancestors on the work stack.
    ///
    /// Legitimate hierarchies are far shallower; exceeding this almost always
    /// means the resolver produced a cycle.
    pub max_depth: usize,
}

impl LinearizeConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 4096;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for LinearizeConfig {
    fn default() -> Self {
        LinearizeConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Settings for a [`LinearizationCache`](crate::LinearizationCache).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Total number of entries kept across all shards.
    ///
    /// Each shard keeps `capacity / shards` entries (rounded up) and evicts
    /// its oldest insertions first. Zero disables storage entirely; every
    /// lookup then recomputes.
    pub capacity: usize,

    /// Settings used for linearizations computed on a cache miss.
    pub linearize: LinearizeConfig,
}

impl CacheConfig {
    pub const DEFAULT_CAPACITY: usize = 64 * 1024;

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_linearize(mut self, linearize: LinearizeConfig) -> Self {
        self.linearize = linearize;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            capacity: Self::DEFAULT_CAPACITY,
            linearize: LinearizeConfig::default(),
        }
    }
}
