//! Bottom-up driver for the merge.
//!
//! A node can only be merged once every direct parent has a linearization,
//! so the driver walks the parent graph in post-order. The walk uses an
//! explicit stack of frames instead of native recursion: ancestor chains of
//! any length cost heap, not call stack, and the stack height doubles as the
//! depth guard that turns a cyclic resolver into an error.
//!
//! Every linearization produced or fetched during a walk is kept in a local
//! memo for the life of the [`Linearizer`]. A shared cache, when attached, is
//! consulted before computing and fed after; evictions from it can never
//! remove something the current walk still needs.

use mro_ir::TypeNode;
use mro_resolve::{ParentResolver, Parents};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::merge::merge;
use crate::{Linearization, LinearizationCache, LinearizeConfig, LinearizeError};

/// Computes linearizations for one resolver, memoising ancestors.
///
/// Reusing a `Linearizer` for several queries shares work between them.
pub struct Linearizer<'a, R: ParentResolver + ?Sized> {
    resolver: &'a R,
    config: LinearizeConfig,
    cache: Option<&'a LinearizationCache>,
    memo: FxHashMap<TypeNode, Linearization>,
}

/// A node waiting for its parents to be linearized.
struct Frame {
    node: TypeNode,
    parents: Parents,
    /// Index of the next parent to check.
    next: usize,
}

impl<'a, R: ParentResolver + ?Sized> Linearizer<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Linearizer {
            resolver,
            config: LinearizeConfig::default(),
            cache: None,
            memo: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LinearizeConfig) -> Self {
        self.config = config;
        self
    }

    /// Read from and publish to a shared cache.
    #[must_use]
    pub fn with_cache(mut self, cache: &'a LinearizationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Linearize `node`.
    #[tracing::instrument(level = "debug", skip(self), fields(resolver = self.resolver.id().raw()))]
    pub fn linearize(&mut self, node: TypeNode) -> Result<Linearization, LinearizeError> {
        if let Some(hit) = self.lookup(node) {
            return Ok(hit);
        }

        let mut stack = vec![Frame {
            node,
            parents: self.resolver.direct_parents(node),
            next: 0,
        }];

        loop {
            let top = stack.len() - 1;
            let frame = &mut stack[top];

            if let Some(&parent) = frame.parents.get(frame.next) {
                frame.next += 1;
                if self.lookup(parent).is_some() {
                    continue;
                }
                if stack.len() >= self.config.max_depth {
                    return Err(LinearizeError::DepthExceeded {
                        root: node,
                        node: parent,
                        limit: self.config.max_depth,
                        chain: stack.iter().map(|f| f.node).collect(),
                    });
                }
                let parents = self.resolver.direct_parents(parent);
                stack.push(Frame {
                    node: parent,
                    parents,
                    next: 0,
                });
                continue;
            }

            let done = stack.swap_remove(top);
            let linearization = self.merge_frame(done.node, &done.parents)?;
            if stack.is_empty() {
                return Ok(linearization);
            }
        }
    }

    /// Merge a node whose parents are all linearized, and record the result.
    fn merge_frame(
        &mut self,
        node: TypeNode,
        parents: &[TypeNode],
    ) -> Result<Linearization, LinearizeError> {
        let mut parent_lins: SmallVec<[Linearization; 4]> = SmallVec::with_capacity(parents.len());
        for &parent in parents {
            let lin = match self.memo.get(&parent) {
                Some(lin) => lin.clone(),
                None => self.linearize(parent)?,
            };
            parent_lins.push(lin);
        }

        let resolver = self.resolver;
        let linearization = merge(node, parents, &parent_lins, |n| resolver.direct_parents(n))?;

        self.memo.insert(node, linearization.clone());
        if let Some(cache) = self.cache {
            cache.insert(resolver.id(), node, linearization.clone());
        }
        Ok(linearization)
    }

    /// Find an existing linearization in the local memo, then the shared
    /// cache. Cache hits are pinned in the memo.
    fn lookup(&mut self, node: TypeNode) -> Option<Linearization> {
        if let Some(hit) = self.memo.get(&node) {
            return Some(hit.clone());
        }
        let hit = self.cache?.get(self.resolver.id(), node)?;
        self.memo.insert(node, hit.clone());
        Some(hit)
    }
}

/// Linearize `node` with default settings and no shared cache.
pub fn linearize<R: ParentResolver + ?Sized>(
    resolver: &R,
    node: TypeNode,
) -> Result<Linearization, LinearizeError> {
    Linearizer::new(resolver).linearize(node)
}

/// Linearize `node` with explicit settings and no shared cache.
pub fn linearize_with<R: ParentResolver + ?Sized>(
    resolver: &R,
    node: TypeNode,
    config: &LinearizeConfig,
) -> Result<Linearization, LinearizeError> {
    Linearizer::new(resolver).with_config(*config).linearize(node)
}
