//! Composite-type parent policies.

use std::fmt;

use mro_ir::{ClassId, ElementType, TypeUniverse};
use smallvec::SmallVec;

/// Element-level parent list, before any array lifting.
pub(crate) type ElementParents = SmallVec<[ElementType; 4]>;

/// How a composite type's superclass and interfaces become its parent list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Policy {
    /// `[superclass] ++ interfaces`, except a root superclass goes last:
    /// `interfaces ++ [root]`. Without a superclass: the interfaces, or
    /// `[root]` if there are none.
    #[default]
    SuperclassFirst,
    /// `interfaces ++ [superclass]`. Without a superclass: the interfaces, or
    /// `[root]` if there are none.
    InterfacesFirst,
    /// Just the interfaces, with the root injected when the list is empty and
    /// the type is not itself an interface.
    InterfacesOnly,
}

impl Policy {
    /// All policies, in declaration order.
    pub const ALL: [Policy; 3] = [
        Policy::SuperclassFirst,
        Policy::InterfacesFirst,
        Policy::InterfacesOnly,
    ];

    /// The flag spelling of this policy.
    pub const fn name(self) -> &'static str {
        match self {
            Policy::SuperclassFirst => "superclass-first",
            Policy::InterfacesFirst => "interfaces-first",
            Policy::InterfacesOnly => "interfaces-only",
        }
    }

    /// Parse a policy from its flag spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Direct parents of a composite type under this policy.
    pub(crate) fn class_parents<U: TypeUniverse + ?Sized>(
        self,
        universe: &U,
        class: ClassId,
    ) -> SmallVec<[ClassId; 4]> {
        let root = universe.root();
        if class == root {
            return SmallVec::new();
        }

        let interfaces = universe.interfaces(class);
        let mut parents: SmallVec<[ClassId; 4]> = SmallVec::with_capacity(interfaces.len() + 1);

        match self {
            Policy::SuperclassFirst => match universe.superclass(class) {
                Some(superclass) if superclass == root => {
                    parents.extend_from_slice(interfaces);
                    parents.push(root);
                }
                Some(superclass) => {
                    parents.push(superclass);
                    parents.extend_from_slice(interfaces);
                }
                None => without_superclass(&mut parents, interfaces, root),
            },
            Policy::InterfacesFirst => match universe.superclass(class) {
                Some(superclass) => {
                    parents.extend_from_slice(interfaces);
                    parents.push(superclass);
                }
                None => without_superclass(&mut parents, interfaces, root),
            },
            Policy::InterfacesOnly => {
                parents.extend_from_slice(interfaces);
                if parents.is_empty() && !universe.is_interface(class) {
                    parents.push(root);
                }
            }
        }

        parents
    }

    /// Direct parents of a non-array type: composites by policy, primitives
    /// by the shared lattice table.
    pub(crate) fn element_parents<U: TypeUniverse + ?Sized>(
        self,
        universe: &U,
        element: ElementType,
    ) -> ElementParents {
        match element {
            ElementType::Class(class) => self
                .class_parents(universe, class)
                .into_iter()
                .map(ElementType::Class)
                .collect(),
            ElementType::Primitive(p) => p
                .widening_parents()
                .iter()
                .copied()
                .map(ElementType::Primitive)
                .collect(),
        }
    }
}

fn without_superclass(parents: &mut SmallVec<[ClassId; 4]>, interfaces: &[ClassId], root: ClassId) {
    if interfaces.is_empty() {
        parents.push(root);
    } else {
        parents.extend_from_slice(interfaces);
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
