//! Descriptor kind tag for tag-driven dispatch.
//!
//! Each [`TypeDescriptor`](crate::TypeDescriptor) reports exactly one `Tag`.
//! The set is closed: canonicalization, equality, hashing and rendering all
//! match exhaustively on it.

use std::fmt;

/// Descriptor kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Tag {
    /// A non-generic, non-array class such as `String`.
    Named = 0,
    /// An array type `T[]`.
    Array = 1,
    /// A generic type applied to arguments, `Map<K, V>`.
    Parameterized = 2,
    /// A bounded existential `?`, `? extends T`, `? super T`.
    Wildcard = 3,
    /// A type variable passed through canonicalization unchanged.
    Variable = 4,
}

impl Tag {
    /// Check if descriptors of this kind contain other descriptors.
    #[inline]
    pub const fn has_children(self) -> bool {
        matches!(self, Self::Array | Self::Parameterized | Self::Wildcard)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Named => "named",
            Self::Array => "array",
            Self::Parameterized => "parameterized",
            Self::Wildcard => "wildcard",
            Self::Variable => "variable",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Compile-time size assertion: Tag must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<Tag>() == 1);
