//! Type universe for C3 linearization.
//!
//! A "type" here is an abstract node in a caller-supplied parent graph, not a
//! runtime class. This crate defines:
//!
//! - [`TypeNode`]: the hashable, ordered identifier for a composite type, a
//!   primitive kind, or an array kind
//! - [`Primitive`]: value-equal scalar kinds with a fixed widening lattice
//! - [`TypeUniverse`]: the inbound boundary, enumerating a composite type's
//!   declared superclass and interfaces
//! - [`ClassRegistry`]: an in-memory universe for embedders and tests
//!
//! # Identity
//!
//! Composite types are identified by [`ClassId`], so two declarations sharing
//! a name are distinct nodes. Primitives are identified by value: there is
//! exactly one `int` node.

mod class_id;
mod display;
mod node;
mod primitive;
mod universe;

pub use class_id::ClassId;
pub use display::NodeDisplay;
pub use node::{ArrayType, ElementType, TypeNode};
pub use primitive::Primitive;
pub use universe::{ClassKind, ClassRegistry, TypeUniverse};
