//! Sharded, bounded linearization cache.
//!
//! Entries are keyed by `(ResolverId, TypeNode)`: resolver identity, not
//! resolver contents. Values are complete [`Linearization`]s, inserted under
//! the shard's write lock only once fully built, so a reader sees either no
//! entry or a finished one.
//!
//! # Eviction
//!
//! Each shard holds a bounded number of entries and evicts its oldest
//! insertions first. Eviction is always safe: a missing entry only means the
//! next request recomputes it. Concurrent misses on the same key may compute
//! it twice; the first published value is kept.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use mro_ir::TypeNode;
use mro_resolve::{ParentResolver, ResolverId};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{CacheConfig, Linearization, LinearizeError, Linearizer};

/// Number of shards.
const NUM_SHARDS: usize = 16;

type CacheKey = (ResolverId, TypeNode);

/// Per-shard storage.
struct CacheShard {
    map: FxHashMap<CacheKey, Linearization>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<CacheKey>,
}

impl CacheShard {
    fn new() -> Self {
        CacheShard {
            map: FxHashMap::default(),
            order: VecDeque::new(),
        }
    }
}

/// Counters describing cache effectiveness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

/// Concurrent memo of computed linearizations.
///
/// # Thread Safety
/// Uses a `RwLock` per shard; reads of different keys rarely contend and
/// never block each other.
pub struct LinearizationCache {
    shards: [RwLock<CacheShard>; NUM_SHARDS],
    capacity_per_shard: usize,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    evictions: AtomicU64,
}

impl LinearizationCache {
    /// Create a cache with default capacity.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        LinearizationCache {
            shards: std::array::from_fn(|_| RwLock::new(CacheShard::new())),
            capacity_per_shard: config.capacity.div_ceil(NUM_SHARDS),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            insertions: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    #[inline]
    fn shard_for(key: &CacheKey) -> usize {
        let mut hasher = rustc_hash::FxHasher::default();
        key.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash_usize = hasher.finish() as usize;
        hash_usize % NUM_SHARDS
    }

    /// Look up a stored linearization.
    pub fn get(&self, resolver: ResolverId, node: TypeNode) -> Option<Linearization> {
        let key = (resolver, node);
        let found = self.shards[Self::shard_for(&key)].read().map.get(&key).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Publish a finished linearization.
    ///
    /// An existing entry for the key is kept: linearization is deterministic,
    /// so both values are equal and keeping the old one avoids churn.
    pub fn insert(&self, resolver: ResolverId, node: TypeNode, linearization: Linearization) {
        if self.capacity_per_shard == 0 {
            return;
        }

        let key = (resolver, node);
        let mut shard = self.shards[Self::shard_for(&key)].write();
        if shard.map.contains_key(&key) {
            return;
        }

        let mut evicted = 0u64;
        while shard.map.len() >= self.capacity_per_shard {
            let Some(oldest) = shard.order.pop_front() else {
                break;
            };
            if shard.map.remove(&oldest).is_some() {
                evicted += 1;
            }
        }

        shard.map.insert(key, linearization);
        shard.order.push_back(key);
        drop(shard);

        self.insertions.fetch_add(1, Ordering::Relaxed);
        if evicted > 0 {
            self.evictions.fetch_add(evicted, Ordering::Relaxed);
            tracing::debug!(evicted, "linearization cache shard full");
        }
    }

    /// Return the cached linearization of `node`, computing and publishing it
    /// (and any ancestors computed along the way) on a miss.
    ///
    /// Failures are never stored: an inconsistent hierarchy is re-examined on
    /// every call.
    pub fn get_or_compute<R: ParentResolver + ?Sized>(
        &self,
        resolver: &R,
        node: TypeNode,
    ) -> Result<Linearization, LinearizeError> {
        Linearizer::new(resolver)
            .with_config(self.config.linearize)
            .with_cache(self)
            .linearize(node)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        for shard in &self.shards {
            let mut shard = shard.write();
            shard.map.clear();
            shard.order.clear();
        }
    }

    /// Drop every entry belonging to one resolver.
    pub fn clear_resolver(&self, resolver: ResolverId) {
        for shard in &self.shards {
            let mut shard = shard.write();
            shard.map.retain(|(id, _), _| *id != resolver);
            shard.order.retain(|(id, _)| *id != resolver);
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().map.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for LinearizationCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CACHE: OnceLock<LinearizationCache> = OnceLock::new();

/// The process-wide cache, created on first use.
pub fn global_cache() -> &'static LinearizationCache {
    GLOBAL_CACHE.get_or_init(LinearizationCache::new)
}

/// Linearize through the process-wide cache.
pub fn linearize_cached<R: ParentResolver + ?Sized>(
    resolver: &R,
    node: TypeNode,
) -> Result<Linearization, LinearizeError> {
    global_cache().get_or_compute(resolver, node)
}

#[cfg(test)]
mod tests;
