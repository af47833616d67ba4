//! C3 linearization.
//!
//! Computes, for a type node and a [`ParentResolver`](mro_resolve::ParentResolver),
//! the single order over the node and all its ancestors that preserves every
//! node's declared parent order (local precedence) and agrees with the
//! linearization of every ancestor (monotonicity). When no such order exists
//! the computation fails with a [`LinearizationFailure`] holding the partial
//! result and the unconsumed input tails.
//!
//! # Layers
//!
//! - [`merge`](crate::merge): the one merge loop over index cursors
//! - [`Linearizer`]: drives merges bottom-up with an explicit work stack
//! - [`LinearizationCache`]: sharded, bounded memo keyed by
//!   `(ResolverId, TypeNode)`; [`global_cache`] is the process-wide instance
//!
//! # Example
//!
//! ```text
//! let resolver = Resolver::superclass_first(&registry);
//! let mro = linearize(&resolver, TypeNode::Class(abstract_set))?;
//! // [AbstractSet, AbstractCollection, Set, Collection, Iterable, Object]
//! ```
//!
//! # Preconditions
//!
//! The resolver's parent relation must be acyclic. A cycle is not detected
//! as such; it runs into [`LinearizeConfig::max_depth`] and surfaces as
//! [`LinearizeError::DepthExceeded`].

mod cache;
mod config;
mod error;
mod linearization;
mod linearizer;
mod merge;

#[cfg(test)]
mod test_fixtures;

pub use cache::{global_cache, linearize_cached, CacheStats, LinearizationCache};
pub use config::{CacheConfig, LinearizeConfig};
pub use error::{LinearizationFailure, LinearizeError};
pub use linearization::Linearization;
pub use linearizer::{linearize, linearize_with, Linearizer};
