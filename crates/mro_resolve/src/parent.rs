//! The resolver seam and resolver identity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use mro_ir::TypeNode;
use smallvec::SmallVec;

/// An ordered direct-parent list. Most types have at most four parents.
pub type Parents = SmallVec<[TypeNode; 4]>;

/// Process-unique identity of a resolver instance.
///
/// Allocated once per constructed resolver. Caches key on this rather than on
/// resolver contents, so two resolvers built from the same universe and
/// policy still own separate cache entries.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct ResolverId(u64);

static NEXT_RESOLVER_ID: AtomicU64 = AtomicU64::new(1);

impl ResolverId {
    /// Allocate a fresh id.
    pub fn fresh() -> Self {
        ResolverId(NEXT_RESOLVER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Maps a type node to its ordered direct parents.
///
/// Implementations must be pure functions of the node and the resolver's own
/// fixed configuration, and must be safe to call from many threads at once.
pub trait ParentResolver: Send + Sync {
    /// Identity of this resolver instance, for cache keying.
    fn id(&self) -> ResolverId;

    /// The node's direct parents, in local precedence order.
    fn direct_parents(&self, node: TypeNode) -> Parents;
}

impl<R: ParentResolver + ?Sized> ParentResolver for &R {
    fn id(&self) -> ResolverId {
        (**self).id()
    }

    fn direct_parents(&self, node: TypeNode) -> Parents {
        (**self).direct_parents(node)
    }
}

impl<R: ParentResolver + ?Sized> ParentResolver for Arc<R> {
    fn id(&self) -> ResolverId {
        (**self).id()
    }

    fn direct_parents(&self, node: TypeNode) -> Parents {
        (**self).direct_parents(node)
    }
}
