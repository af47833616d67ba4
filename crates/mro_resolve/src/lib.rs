//! Parent resolution for C3 linearization.
//!
//! A [`ParentResolver`] maps a [`TypeNode`] to its ordered list of direct
//! parents. The order is load-bearing: it is the local precedence the merge
//! must preserve.
//!
//! # Policies
//!
//! [`Resolver`] implements the three standard policies over any
//! [`TypeUniverse`](mro_ir::TypeUniverse), selected by [`Policy`]:
//!
//! | Policy            | Class `C extends S implements I1, I2` |
//! |-------------------|---------------------------------------|
//! | `SuperclassFirst` | `[S, I1, I2]` (`[I1, I2, Object]` if `S` is the root) |
//! | `InterfacesFirst` | `[I1, I2, S]`                          |
//! | `InterfacesOnly`  | `[I1, I2]` (`[Object]` if empty and `C` is a class) |
//!
//! Primitive kinds and arrays are handled identically under every policy: one
//! lattice table ([`Primitive::widening_parents`](mro_ir::Primitive::widening_parents))
//! and one lifting routine for arrays.
//!
//! # Contract
//!
//! Resolvers must be pure: the same node always yields the same list, and the
//! parent relation must be acyclic. Neither is checked here; a cyclic
//! resolver surfaces as a depth error in the linearizer.

mod array;
mod parent;
mod policy;
mod resolver;

pub use parent::{ParentResolver, Parents, ResolverId};
pub use policy::Policy;
pub use resolver::Resolver;
