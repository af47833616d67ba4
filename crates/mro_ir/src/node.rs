//! Type nodes.
//!
//! [`TypeNode`] is the vertex type of the parent graph. It is `Copy`, hashable
//! and totally ordered so it can key caches and sit in sorted diagnostics.
//!
//! Arrays are stored flattened: `int[][]` is one [`ArrayType`] with a
//! primitive element and two dimensions, never an array of an array. This
//! keeps lifting and lowering by dimension O(1) and makes the element of an
//! array always a non-array type.

use crate::{ClassId, Primitive};

/// A vertex in the type universe.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub enum TypeNode {
    /// A composite declaration (class or interface), identity-equal.
    Class(ClassId),
    /// A primitive kind, value-equal.
    Primitive(Primitive),
    /// An array of a non-array element type.
    Array(ArrayType),
}

/// The element of an array: any non-array type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub enum ElementType {
    Class(ClassId),
    Primitive(Primitive),
}

/// An array type with at least one dimension.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct ArrayType {
    element: ElementType,
    dims: u8,
}

impl ArrayType {
    /// Create an array type. Returns `None` for zero dimensions.
    #[inline]
    pub const fn new(element: ElementType, dims: u8) -> Option<Self> {
        if dims == 0 {
            None
        } else {
            Some(Self { element, dims })
        }
    }

    /// The innermost (non-array) element type.
    #[inline]
    pub const fn element(self) -> ElementType {
        self.element
    }

    /// Number of dimensions, always at least one.
    #[inline]
    pub const fn dims(self) -> u8 {
        self.dims
    }
}

impl ElementType {
    /// Lift this element by `dims` array dimensions.
    ///
    /// Lifting by zero yields the element itself as a node.
    #[inline]
    pub const fn lifted(self, dims: u8) -> TypeNode {
        match ArrayType::new(self, dims) {
            Some(array) => TypeNode::Array(array),
            None => self.node(),
        }
    }

    /// The element as a plain node.
    #[inline]
    pub const fn node(self) -> TypeNode {
        match self {
            ElementType::Class(id) => TypeNode::Class(id),
            ElementType::Primitive(p) => TypeNode::Primitive(p),
        }
    }
}

impl TypeNode {
    /// The universal root type.
    pub const ROOT: Self = Self::Class(ClassId::OBJECT);

    /// Wrap this node in `dims` more array dimensions.
    ///
    /// Returns `None` if the total would exceed 255 dimensions.
    pub fn array_of(self, dims: u8) -> Option<Self> {
        match self {
            TypeNode::Class(id) => Some(ElementType::Class(id).lifted(dims)),
            TypeNode::Primitive(p) => Some(ElementType::Primitive(p).lifted(dims)),
            TypeNode::Array(array) => {
                let total = array.dims.checked_add(dims)?;
                Some(TypeNode::Array(ArrayType {
                    element: array.element,
                    dims: total,
                }))
            }
        }
    }

    /// Strip up to `dims` array dimensions.
    ///
    /// Lowering an array by all of its dimensions yields its element;
    /// lowering a non-array is the identity.
    pub fn lowered(self, dims: u8) -> Self {
        match self {
            TypeNode::Array(array) => array.element.lifted(array.dims.saturating_sub(dims)),
            other => other,
        }
    }

    /// View this node as an array element, if it is not itself an array.
    #[inline]
    pub const fn as_element(self) -> Option<ElementType> {
        match self {
            TypeNode::Class(id) => Some(ElementType::Class(id)),
            TypeNode::Primitive(p) => Some(ElementType::Primitive(p)),
            TypeNode::Array(_) => None,
        }
    }

    /// The composite id, if this is a class or interface node.
    #[inline]
    pub const fn as_class(self) -> Option<ClassId> {
        match self {
            TypeNode::Class(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, TypeNode::Array(_))
    }
}

impl From<ClassId> for TypeNode {
    fn from(id: ClassId) -> Self {
        TypeNode::Class(id)
    }
}

impl From<Primitive> for TypeNode {
    fn from(p: Primitive) -> Self {
        TypeNode::Primitive(p)
    }
}

impl From<ArrayType> for TypeNode {
    fn from(array: ArrayType) -> Self {
        TypeNode::Array(array)
    }
}

impl From<ElementType> for TypeNode {
    fn from(element: ElementType) -> Self {
        element.node()
    }
}

#[cfg(test)]
mod tests;
