//! The computed order.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use mro_ir::TypeNode;

/// A successful linearization: the queried node followed by each of its
/// ancestors exactly once.
///
/// Backed by a shared slice, so cloning is a reference-count bump and cache
/// hits never copy the sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Linearization(Arc<[TypeNode]>);

impl Linearization {
    /// Wrap a finished sequence. The first element must be the queried node.
    pub(crate) fn from_vec(nodes: Vec<TypeNode>) -> Self {
        debug_assert!(!nodes.is_empty(), "a linearization always contains its node");
        Linearization(nodes.into())
    }

    /// The node this is the linearization of.
    #[inline]
    pub fn node(&self) -> TypeNode {
        self.0[0]
    }

    /// Every ancestor, most specific first, excluding the node itself.
    #[inline]
    pub fn ancestors(&self) -> &[TypeNode] {
        &self.0[1..]
    }

    #[inline]
    pub fn as_slice(&self) -> &[TypeNode] {
        &self.0
    }

    /// Position of `node` in the order, if present.
    pub fn position(&self, node: TypeNode) -> Option<usize> {
        self.0.iter().position(|&n| n == node)
    }

    /// Whether `a` comes strictly before `b`. False if either is absent.
    pub fn precedes(&self, a: TypeNode, b: TypeNode) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa < pb,
            _ => false,
        }
    }

    /// Whether both linearizations share the same backing allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Linearization) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Linearization {
    type Target = [TypeNode];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Linearization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Linearization {
    type Item = &'a TypeNode;
    type IntoIter = std::slice::Iter<'a, TypeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
