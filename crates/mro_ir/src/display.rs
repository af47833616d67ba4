//! Human-readable rendering of type nodes.

use std::fmt;

use crate::{ElementType, TypeNode, TypeUniverse};

/// Renders a [`TypeNode`] using names from a [`TypeUniverse`].
///
/// Classes print their declared name, primitives their keyword, and arrays
/// their element followed by one `[]` per dimension.
pub struct NodeDisplay<'a, U: TypeUniverse + ?Sized> {
    node: TypeNode,
    universe: &'a U,
}

impl<'a, U: TypeUniverse + ?Sized> NodeDisplay<'a, U> {
    pub fn new(node: TypeNode, universe: &'a U) -> Self {
        NodeDisplay { node, universe }
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, element: ElementType) -> fmt::Result {
        match element {
            ElementType::Class(id) => f.write_str(self.universe.class_name(id)),
            ElementType::Primitive(p) => f.write_str(p.keyword()),
        }
    }
}

impl<U: TypeUniverse + ?Sized> fmt::Display for NodeDisplay<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            TypeNode::Class(id) => self.write_element(f, ElementType::Class(id)),
            TypeNode::Primitive(p) => self.write_element(f, ElementType::Primitive(p)),
            TypeNode::Array(array) => {
                self.write_element(f, array.element())?;
                for _ in 0..array.dims() {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}
