//! Shared hierarchies for unit tests.

use mro_ir::{ClassId, ClassRegistry, TypeNode};

/// A small collections hierarchy plus one deliberately inconsistent corner.
pub(crate) struct Collections {
    pub reg: ClassRegistry,
    pub iterable: ClassId,
    pub collection: ClassId,
    pub set: ClassId,
    pub abstract_collection: ClassId,
    pub abstract_set: ClassId,
    pub hash_set: ClassId,
    pub b: ClassId,
    pub c: ClassId,
    /// Declares `[B, C]` while `C` declares `[B]`.
    pub bad: ClassId,
}

impl Collections {
    pub(crate) fn new() -> Self {
        let mut reg = ClassRegistry::new();
        let iterable = reg.declare_interface("Iterable");
        let collection = reg.declare_interface("Collection");
        let set = reg.declare_interface("Set");
        let abstract_collection = reg.declare_class("AbstractCollection");
        let abstract_set = reg.declare_class("AbstractSet");
        let hash_set = reg.declare_class("HashSet");
        let b = reg.declare_interface("B");
        let c = reg.declare_interface("C");
        let bad = reg.declare_interface("Bad");

        reg.set_interfaces(collection, [iterable]);
        reg.set_interfaces(set, [collection]);
        reg.set_interfaces(abstract_collection, [collection]);
        reg.set_superclass(abstract_set, Some(abstract_collection));
        reg.set_interfaces(abstract_set, [set]);
        reg.set_superclass(hash_set, Some(abstract_set));
        reg.set_interfaces(hash_set, [set, ClassId::CLONEABLE, ClassId::SERIALIZABLE]);
        reg.set_interfaces(c, [b]);
        reg.set_interfaces(bad, [b, c]);

        Collections {
            reg,
            iterable,
            collection,
            set,
                abstract_collection,
            abstract_set,
            hash_set,
            b,
            c,
            bad,
        }
    }
}

pub(crate) fn class(id: ClassId) -> TypeNode {
    TypeNode::Class(id)
}

pub(crate) fn classes(ids: &[ClassId]) -> Vec<TypeNode> {
    ids.iter().copied().map(TypeNode::Class).collect()
}
