//! End-to-end linearizations of canonical collection-style hierarchies.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mro_ir::{ClassId, ClassRegistry, Primitive, TypeNode};
use mro_linearize::{linearize, LinearizationCache, LinearizeError};
use mro_resolve::{ParentResolver, Resolver};
use pretty_assertions::assert_eq;

struct Hierarchy {
    reg: ClassRegistry,
    iterable: ClassId,
    collection: ClassId,
    set: ClassId,
    abstract_collection: ClassId,
    abstract_set: ClassId,
}

fn hierarchy() -> Hierarchy {
    let mut reg = ClassRegistry::new();
    let iterable = reg.declare_interface("Iterable");
    let collection = reg.declare_interface("Collection");
    let set = reg.declare_interface("Set");
    let abstract_collection = reg.declare_class("AbstractCollection");
    let abstract_set = reg.declare_class("AbstractSet");

    reg.set_interfaces(collection, [iterable]);
    reg.set_interfaces(set, [collection]);
    reg.set_interfaces(abstract_collection, [collection]);
    reg.set_superclass(abstract_set, Some(abstract_collection));
    reg.set_interfaces(abstract_set, [set]);

    Hierarchy {
        reg,
        iterable,
        collection,
        set,
        abstract_collection,
        abstract_set,
    }
}

fn nodes(ids: &[ClassId]) -> Vec<TypeNode> {
    ids.iter().copied().map(TypeNode::Class).collect()
}

#[test]
fn set_walks_its_interface_chain() {
    let h = hierarchy();
    let resolver = Resolver::superclass_first(&h.reg);
    let lin = linearize(&resolver, TypeNode::Class(h.set)).unwrap();
    assert_eq!(
        lin.to_vec(),
        nodes(&[h.set, h.collection, h.iterable, ClassId::OBJECT])
    );
}

#[test]
fn abstract_set_resolves_the_diamond() {
    let h = hierarchy();
    let resolver = Resolver::superclass_first(&h.reg);
    let lin = linearize(&resolver, TypeNode::Class(h.abstract_set)).unwrap();
    assert_eq!(
        lin.to_vec(),
        nodes(&[
            h.abstract_set,
            h.abstract_collection,
            h.set,
            h.collection,
            h.iterable,
            ClassId::OBJECT,
        ])
    );
}

#[test]
fn double_walks_the_widening_lattice() {
    let h = hierarchy();
    let resolver = Resolver::superclass_first(&h.reg);
    let lin = linearize(&resolver, TypeNode::Primitive(Primitive::Double)).unwrap();
    let expected: Vec<TypeNode> = [
        Primitive::Double,
        Primitive::Float,
        Primitive::Long,
        Primitive::Int,
        Primitive::Short,
        Primitive::Char,
        Primitive::Byte,
    ]
    .into_iter()
    .map(TypeNode::Primitive)
    .collect();
    assert_eq!(lin.to_vec(), expected);
}

#[test]
fn contradictory_precedence_is_reported() {
    let mut reg = ClassRegistry::new();
    let b = reg.declare_interface("B");
    let c = reg.declare_interface("C");
    let a = reg.declare_interface("A");
    reg.set_interfaces(c, [b]);
    reg.set_interfaces(a, [b, c]);

    let resolver = Resolver::superclass_first(&reg);
    let err = linearize(&resolver, TypeNode::Class(a)).unwrap_err();
    let LinearizeError::Inconsistent(failure) = err else {
        panic!("expected an inconsistency, got {err:?}");
    };

    assert_eq!(failure.node(), TypeNode::Class(a));
    assert!(!failure.partial().is_empty());
    assert!(failure.remaining().iter().any(|input| !input.is_empty()));
    assert_eq!(failure.conflicting(), nodes(&[b, c]));
}

#[test]
fn cached_results_survive_unrelated_invalidation() {
    let h = hierarchy();
    let ours = Resolver::superclass_first(&h.reg);
    let theirs = Resolver::interfaces_first(&h.reg);
    let cache = LinearizationCache::new();
    let node = TypeNode::Class(h.abstract_set);

    let first = cache.get_or_compute(&ours, node).unwrap();
    cache.get_or_compute(&theirs, node).unwrap();
    cache.clear_resolver(theirs.id());
    let second = cache.get_or_compute(&ours, node).unwrap();

    assert_eq!(first, second);
    assert!(first.ptr_eq(&second));
}
