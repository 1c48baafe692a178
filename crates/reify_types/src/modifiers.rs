//! Class declaration modifiers.
//!
//! Only `STATIC` takes part in canonicalization: a parameterized type whose
//! raw class is a non-static member class must name its owner type. The
//! remaining flags are carried for callers describing their classes.

use bitflags::bitflags;

bitflags! {
    /// Modifiers attached to a class declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        /// Visible everywhere.
        const PUBLIC = 1 << 0;
        /// Member class that does not capture an enclosing instance.
        const STATIC = 1 << 1;
        /// Cannot be instantiated directly.
        const ABSTRACT = 1 << 2;
        /// Cannot be subclassed.
        const FINAL = 1 << 3;
        /// Declared without a name at its point of use (type-token subclasses).
        const ANONYMOUS = 1 << 4;
    }
}

impl Modifiers {
    /// Check if the class is a static member class.
    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Check if the class is abstract.
    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    /// Check if the class was declared anonymously.
    #[inline]
    pub const fn is_anonymous(self) -> bool {
        self.contains(Self::ANONYMOUS)
    }
}
