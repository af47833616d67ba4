//! Composite type handle.
//!
//! `ClassId` is a 32-bit index into a [`ClassRegistry`](crate::ClassRegistry)
//! (or any other [`TypeUniverse`](crate::TypeUniverse)). Equality is index
//! equality, which gives composite types identity semantics: redeclaring a
//! name yields a fresh id.
//!
//! The first three indices are reserved for the well-known types every
//! universe has: the root and the two array marker interfaces.

use std::fmt;

/// A 32-bit handle for a composite (class or interface) declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    // === Well-known Types (indices 0-2) ===

    /// The universal root type. Terminates every ancestry.
    pub const OBJECT: Self = Self(0);
    /// Marker interface implemented by every array.
    pub const SERIALIZABLE: Self = Self(1);
    /// Marker interface implemented by every array.
    pub const CLONEABLE: Self = Self(2);

    /// First index handed out for user declarations.
    pub const FIRST_DYNAMIC: u32 = 3;

    /// Create an id from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the id as a `usize` for indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-registered well-known types.
    #[inline]
    pub const fn is_well_known(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OBJECT => write!(f, "ClassId::OBJECT"),
            Self::SERIALIZABLE => write!(f, "ClassId::SERIALIZABLE"),
            Self::CLONEABLE => write!(f, "ClassId::CLONEABLE"),
            Self(raw) => write!(f, "ClassId({raw})"),
        }
    }
}
