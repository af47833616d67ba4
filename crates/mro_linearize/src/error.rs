//! Linearization errors.
//!
//! Both variants are structural: callers get the nodes involved, not just a
//! message, so they can render names through their own type universe.

use mro_ir::TypeNode;

/// The merge for `node` got stuck: no input head was free of every tail.
///
/// Captured at the exact point of failure. Retrying cannot help unless the
/// resolver's parent lists change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("inconsistent precedence while linearizing {node:?}: no valid successor after {partial:?}")]
pub struct LinearizationFailure {
    node: TypeNode,
    parents: Vec<TypeNode>,
    partial: Vec<TypeNode>,
    remaining: Vec<Vec<TypeNode>>,
}

impl LinearizationFailure {
    pub(crate) fn new(
        node: TypeNode,
        parents: Vec<TypeNode>,
        partial: Vec<TypeNode>,
        remaining: Vec<Vec<TypeNode>>,
    ) -> Self {
        LinearizationFailure {
            node,
            parents,
            partial,
            remaining,
        }
    }

    /// The node whose merge failed. This may be an ancestor of the node
    /// originally requested.
    #[inline]
    pub fn node(&self) -> TypeNode {
        self.node
    }

    /// Direct parents of [`node`](Self::node), in declared order.
    /// `remaining()[i]` is what is left of `parents()[i]`'s linearization.
    #[inline]
    pub fn parents(&self) -> &[TypeNode] {
        &self.parents
    }

    /// The order accumulated before the merge got stuck, starting with
    /// [`node`](Self::node).
    #[inline]
    pub fn partial(&self) -> &[TypeNode] {
        &self.partial
    }

    /// Unconsumed tail of every merge input, in input order: one entry per
    /// direct parent's linearization, then the direct-parent list itself.
    /// Fully consumed inputs appear as empty lists.
    #[inline]
    pub fn remaining(&self) -> &[Vec<TypeNode>] {
        &self.remaining
    }

    /// The distinct heads of the non-empty remaining inputs: the nodes whose
    /// declared precedences conflict.
    pub fn conflicting(&self) -> Vec<TypeNode> {
        let mut heads = Vec::new();
        for head in self.remaining.iter().filter_map(|input| input.first()) {
            if !heads.contains(head) {
                heads.push(*head);
            }
        }
        heads
    }
}

/// Error returned by every linearization entry point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinearizeError {
    /// The declared parent orders admit no consistent linearization.
    #[error(transparent)]
    Inconsistent(#[from] LinearizationFailure),

    /// The ancestor chain grew past the configured limit. The resolver's
    /// parent relation is almost certainly cyclic.
    #[error("ancestor chain of {root:?} exceeds {limit} levels at {node:?}; the parent relation may be cyclic")]
    DepthExceeded {
        /// The node originally requested.
        root: TypeNode,
        /// The ancestor that would have exceeded the limit.
        node: TypeNode,
        /// The configured limit.
        limit: usize,
        /// Nodes on the work stack at the point of failure, outermost first.
        chain: Vec<TypeNode>,
    },
}

impl LinearizeError {
    /// The failure record, if this is an inconsistency.
    pub fn failure(&self) -> Option<&LinearizationFailure> {
        match self {
            LinearizeError::Inconsistent(failure) => Some(failure),
            LinearizeError::DepthExceeded { .. } => None,
        }
    }
}
