//! Class identity handle.
//!
//! `ClassId` is the opaque identity a `Named` descriptor carries. Every
//! class declared in a [`ClassTable`](crate::ClassTable) gets exactly one
//! handle, so two reflective queries over the same class always hand back
//! equal handles even when they went through different lookup paths.
//!
//! # Layout
//!
//! - `Object`, the nine primitives and the type-token base class are
//!   pre-registered at fixed indices (0-10)
//! - Classes registered later start at `PRELUDE_COUNT`
//! - Equality and hashing are O(1) index comparisons

use std::fmt;

/// A 32-bit index into a class table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    // === Universal top ===

    /// `Object`, the implicit upper bound of every wildcard.
    pub const OBJECT: Self = Self(0);

    // === Primitives (indices 1-9) ===

    /// The `boolean` primitive.
    pub const BOOLEAN: Self = Self(1);
    /// The `byte` primitive.
    pub const BYTE: Self = Self(2);
    /// The `char` primitive.
    pub const CHAR: Self = Self(3);
    /// The `short` primitive.
    pub const SHORT: Self = Self(4);
    /// The `int` primitive.
    pub const INT: Self = Self(5);
    /// The `long` primitive.
    pub const LONG: Self = Self(6);
    /// The `float` primitive.
    pub const FLOAT: Self = Self(7);
    /// The `double` primitive.
    pub const DOUBLE: Self = Self(8);
    /// The `void` pseudo-type.
    pub const VOID: Self = Self(9);

    // === Type-token base ===

    /// The abstract generic base `TypeToken<T>`.
    pub const TYPE_TOKEN: Self = Self(10);

    /// Number of pre-registered classes. Dynamic classes start here.
    pub const PRELUDE_COUNT: u32 = 11;

    /// Create a handle from a raw index.
    ///
    /// The handle is only meaningful for the table that produced it.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the nine primitive classes.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 >= Self::BOOLEAN.0 && self.0 <= Self::VOID.0
    }

    /// Check if this class is pre-registered in every table.
    #[inline]
    pub const fn is_prelude(self) -> bool {
        self.0 < Self::PRELUDE_COUNT
    }

    /// Get the name of a pre-registered class.
    ///
    /// Returns `None` for dynamic classes, which need a table to name them.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Object"),
            1 => Some("boolean"),
            2 => Some("byte"),
            3 => Some("char"),
            4 => Some("short"),
            5 => Some("int"),
            6 => Some("long"),
            7 => Some("float"),
            8 => Some("double"),
            9 => Some("void"),
            10 => Some("TypeToken"),
            _ => None,
        }
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "ClassId({name})"),
            None => write!(f, "ClassId({})", self.0),
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "class#{}", self.0),
        }
    }
}

// Compile-time size assertion: ClassId must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<ClassId>() == 4);
