//! The type universe: where composite types get their declared relations.
//!
//! [`TypeUniverse`] is the only thing the resolvers know about the embedding
//! system. It must be finite per node, enumerable in a stable order, and
//! acyclic in whatever relation a resolver actually follows.
//!
//! [`ClassRegistry`] is the in-memory implementation. It is built in two
//! phases so declarations may refer to types declared later:
//!
//! ```text
//! let mut reg = ClassRegistry::new();
//! let set = reg.declare_interface("Set");
//! let coll = reg.declare_interface("Collection");
//! reg.set_interfaces(set, [coll]);
//! ```
//!
//! Once a registry is handed to a resolver it must not change: resolvers are
//! required to be pure functions of the node, and cached linearizations are
//! never invalidated by registry edits.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::ClassId;

/// Access to the declared super-relations of composite types.
pub trait TypeUniverse: Send + Sync {
    /// The declared superclass, or `None` for the root and for interfaces.
    fn superclass(&self, class: ClassId) -> Option<ClassId>;

    /// Directly declared interfaces, in declaration order.
    fn interfaces(&self, class: ClassId) -> &[ClassId];

    /// Whether the type is interface-like (has no superclass by nature).
    fn is_interface(&self, class: ClassId) -> bool;

    /// Human-readable name for diagnostics.
    fn class_name(&self, class: ClassId) -> &str;

    /// The universal root type.
    fn root(&self) -> ClassId {
        ClassId::OBJECT
    }

    /// The serializability marker every array implements.
    fn serializable(&self) -> ClassId {
        ClassId::SERIALIZABLE
    }

    /// The cloneability marker every array implements.
    fn cloneable(&self) -> ClassId {
        ClassId::CLONEABLE
    }
}

impl<T: TypeUniverse + ?Sized> TypeUniverse for &T {
    fn superclass(&self, class: ClassId) -> Option<ClassId> {
        (**self).superclass(class)
    }

    fn interfaces(&self, class: ClassId) -> &[ClassId] {
        (**self).interfaces(class)
    }

    fn is_interface(&self, class: ClassId) -> bool {
        (**self).is_interface(class)
    }

    fn class_name(&self, class: ClassId) -> &str {
        (**self).class_name(class)
    }

    fn root(&self) -> ClassId {
        (**self).root()
    }

    fn serializable(&self) -> ClassId {
        (**self).serializable()
    }

    fn cloneable(&self) -> ClassId {
        (**self).cloneable()
    }
}

impl<T: TypeUniverse + ?Sized> TypeUniverse for Arc<T> {
    fn superclass(&self, class: ClassId) -> Option<ClassId> {
        (**self).superclass(class)
    }

    fn interfaces(&self, class: ClassId) -> &[ClassId] {
        (**self).interfaces(class)
    }

    fn is_interface(&self, class: ClassId) -> bool {
        (**self).is_interface(class)
    }

    fn class_name(&self, class: ClassId) -> &str {
        (**self).class_name(class)
    }

    fn root(&self) -> ClassId {
        (**self).root()
    }

    fn serializable(&self) -> ClassId {
        (**self).serializable()
    }

    fn cloneable(&self) -> ClassId {
        (**self).cloneable()
    }
}

/// Whether a declaration is a class or an interface.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKind {
    Class,
    Interface,
}

/// A registered composite declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ClassEntry {
    name: String,
    kind: ClassKind,
    superclass: Option<ClassId>,
    interfaces: SmallVec<[ClassId; 4]>,
}

/// In-memory type universe.
///
/// Declarations are stored in a single `Vec` indexed by [`ClassId`]; the
/// name map holds every id declared under a name, oldest first, since names
/// do not determine identity.
#[derive(Clone, Debug)]
pub struct ClassRegistry {
    classes: Vec<ClassEntry>,
    by_name: FxHashMap<String, SmallVec<[ClassId; 1]>>,
}

impl ClassRegistry {
    /// Create a registry holding only the well-known types.
    pub fn new() -> Self {
        let mut registry = ClassRegistry {
            classes: Vec::with_capacity(64),
            by_name: FxHashMap::default(),
        };

        // Order must match the ClassId constants.
        let object = registry.declare("Object", ClassKind::Class);
        let serializable = registry.declare("Serializable", ClassKind::Interface);
        let cloneable = registry.declare("Cloneable", ClassKind::Interface);
        debug_assert_eq!(object, ClassId::OBJECT);
        debug_assert_eq!(serializable, ClassId::SERIALIZABLE);
        debug_assert_eq!(cloneable, ClassId::CLONEABLE);

        registry
    }

    /// Declare a class. It extends the root until told otherwise.
    pub fn declare_class(&mut self, name: impl Into<String>) -> ClassId {
        let id = self.declare(name, ClassKind::Class);
        self.classes[id.index()].superclass = Some(ClassId::OBJECT);
        id
    }

    /// Declare an interface. Interfaces never have a superclass.
    pub fn declare_interface(&mut self, name: impl Into<String>) -> ClassId {
        self.declare(name, ClassKind::Interface)
    }

    fn declare(&mut self, name: impl Into<String>, kind: ClassKind) -> ClassId {
        let name = name.into();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "more than u32::MAX declarations is not a supported universe"
        )]
        let id = ClassId::from_raw(self.classes.len() as u32);
        self.by_name.entry(name.clone()).or_default().push(id);
        self.classes.push(ClassEntry {
            name,
            kind,
            superclass: None,
            interfaces: SmallVec::new(),
        });
        id
    }

    /// Set (or clear) the superclass of a class.
    ///
    /// Ignored for interfaces, which have no superclass by definition.
    pub fn set_superclass(&mut self, class: ClassId, superclass: Option<ClassId>) {
        if let Some(entry) = self.classes.get_mut(class.index()) {
            if entry.kind == ClassKind::Class {
                entry.superclass = superclass;
            }
        }
    }

    /// Replace the directly declared interfaces of a type.
    pub fn set_interfaces(&mut self, class: ClassId, interfaces: impl IntoIterator<Item = ClassId>) {
        if let Some(entry) = self.classes.get_mut(class.index()) {
            entry.interfaces = interfaces.into_iter().collect();
        }
    }

    /// Look up the oldest declaration with this name.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).and_then(|ids| ids.first().copied())
    }

    /// All declarations with this name, oldest first.
    pub fn lookup_all(&self, name: &str) -> &[ClassId] {
        self.by_name.get(name).map(|ids| ids.as_slice()).unwrap_or(&[])
    }

    /// The kind of a declaration, if it exists.
    pub fn kind(&self, class: ClassId) -> Option<ClassKind> {
        self.classes.get(class.index()).map(|e| e.kind)
    }

    /// Check if an id refers to a declaration in this registry.
    #[inline]
    pub fn contains(&self, class: ClassId) -> bool {
        class.index() < self.classes.len()
    }

    /// Number of declarations, including the well-known types.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: the well-known types are always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate all ids in declaration order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "declare() already bounds the registry to u32 ids"
    )]
    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len()).map(|i| ClassId::from_raw(i as u32))
    }

    /// Iterate user declarations (everything after the well-known types).
    pub fn user_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.ids().filter(|id| !id.is_well_known())
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeUniverse for ClassRegistry {
    fn superclass(&self, class: ClassId) -> Option<ClassId> {
        self.classes.get(class.index()).and_then(|e| e.superclass)
    }

    fn interfaces(&self, class: ClassId) -> &[ClassId] {
        self.classes
            .get(class.index())
            .map(|e| e.interfaces.as_slice())
            .unwrap_or(&[])
    }

    fn is_interface(&self, class: ClassId) -> bool {
        self.kind(class) == Some(ClassKind::Interface)
    }

    fn class_name(&self, class: ClassId) -> &str {
        self.classes
            .get(class.index())
            .map_or("<unknown>", |e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests;
