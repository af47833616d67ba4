//! Primitive kinds and their widening lattice.
//!
//! The lattice is domain data: it cannot be derived from the composite-type
//! rules, so it lives here as one constant table shared by every resolver
//! policy. A primitive's "direct parents" are the kinds it widens from, so
//! walking parents goes from wide to narrow:
//!
//! ```text
//! double -> float -> long -> int -> short -> byte
//!                                 \-> char  -/
//! ```
//!
//! `boolean` and `void` sit outside the lattice and have no parents.

use std::fmt;

/// A primitive (scalar) kind. Value-equal: there is exactly one `int`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl Primitive {
    /// All primitive kinds, in declaration order.
    pub const ALL: [Primitive; 9] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Void,
    ];

    /// Direct parents in the widening lattice, in precedence order.
    #[inline]
    pub const fn widening_parents(self) -> &'static [Primitive] {
        match self {
            Primitive::Double => &[Primitive::Float],
            Primitive::Float => &[Primitive::Long],
            Primitive::Long => &[Primitive::Int],
            Primitive::Int => &[Primitive::Short, Primitive::Char],
            Primitive::Short | Primitive::Char => &[Primitive::Byte],
            Primitive::Byte | Primitive::Boolean | Primitive::Void => &[],
        }
    }

    /// The source keyword for this kind.
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    /// Look up a primitive by keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
