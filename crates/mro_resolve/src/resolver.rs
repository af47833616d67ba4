//! The standard resolver: one policy over one type universe.

use std::fmt;

use mro_ir::{TypeNode, TypeUniverse};

use crate::array::array_parents;
use crate::{ParentResolver, Parents, Policy, ResolverId};

/// Resolves direct parents from a [`TypeUniverse`] under a [`Policy`].
///
/// Each constructed resolver gets a fresh [`ResolverId`], so it owns its own
/// entries in a shared linearization cache. Build resolvers once and reuse
/// them; they are cheap to share behind `&` or `Arc`.
pub struct Resolver<U> {
    id: ResolverId,
    universe: U,
    policy: Policy,
}

impl<U: TypeUniverse> Resolver<U> {
    /// Create a resolver for `universe` under `policy`.
    pub fn new(universe: U, policy: Policy) -> Self {
        Resolver {
            id: ResolverId::fresh(),
            universe,
            policy,
        }
    }

    /// The default policy: superclass first, root last.
    pub fn superclass_first(universe: U) -> Self {
        Self::new(universe, Policy::SuperclassFirst)
    }

    pub fn interfaces_first(universe: U) -> Self {
        Self::new(universe, Policy::InterfacesFirst)
    }

    pub fn interfaces_only(universe: U) -> Self {
        Self::new(universe, Policy::InterfacesOnly)
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    pub fn universe(&self) -> &U {
        &self.universe
    }
}

impl<U: TypeUniverse> ParentResolver for Resolver<U> {
    #[inline]
    fn id(&self) -> ResolverId {
        self.id
    }

    #[tracing::instrument(level = "trace", skip(self), fields(policy = %self.policy), ret)]
    fn direct_parents(&self, node: TypeNode) -> Parents {
        match node {
            TypeNode::Array(array) => array_parents(&self.universe, self.policy, array),
            TypeNode::Class(_) | TypeNode::Primitive(_) => match node.as_element() {
                Some(element) => self
                    .policy
                    .element_parents(&self.universe, element)
                    .into_iter()
                    .map(TypeNode::from)
                    .collect(),
                None => Parents::new(),
            },
        }
    }
}

impl<U> fmt::Debug for Resolver<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("id", &self.id)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
