//! Canonical type descriptors.
//!
//! A `TypeDescriptor` is an immutable value describing one type shape. The
//! representation is private: descriptors only come out of the checked
//! constructors in [`construct`] or out of [`canonicalize`](crate::canonicalize),
//! so every descriptor in existence already satisfies the owner, argument
//! and bound invariants, and array classes never appear as `Named`.
//!
//! Equality and hashing are structural and derived field-by-field. `Named`
//! compares by [`ClassId`], which the class table hands out once per class,
//! so descriptors built from different reflective queries compare equal.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{ClassId, Tag};

mod construct;
mod format;

pub use format::{render, render_into, DisplayDescriptor};

/// A type variable the engine does not resolve (e.g. `T` of `List<T>`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeVariable {
    /// Declared name.
    pub name: Box<str>,
    /// Class declaring the variable, if known.
    pub declared_by: Option<ClassId>,
}

impl TypeVariable {
    /// Create a type variable.
    pub fn new(name: impl Into<Box<str>>, declared_by: Option<ClassId>) -> Self {
        Self {
            name: name.into(),
            declared_by,
        }
    }
}

/// A canonical, structurally comparable type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDescriptor(Repr);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
enum Repr {
    Named(ClassId),
    ArrayOf(Box<TypeDescriptor>),
    Parameterized {
        owner: Option<Box<TypeDescriptor>>,
        raw: Box<TypeDescriptor>,
        args: Box<[TypeDescriptor]>,
    },
    Wildcard {
        upper: Box<TypeDescriptor>,
        lower: Option<Box<TypeDescriptor>>,
    },
    Variable(TypeVariable),
}

/// Borrowed view of a descriptor for exhaustive matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `String`
    Named(ClassId),
    /// `T[]`
    ArrayOf(&'a TypeDescriptor),
    /// `Raw<Args...>`
    Parameterized {
        /// Owner type for member classes.
        owner: Option<&'a TypeDescriptor>,
        /// The generic class.
        raw: &'a TypeDescriptor,
        /// Actual type arguments.
        args: &'a [TypeDescriptor],
    },
    /// `?`, `? extends T`, `? super T`
    Wildcard {
        /// Upper bound, `Object` when unconstrained.
        upper: &'a TypeDescriptor,
        /// Lower bound, if any.
        lower: Option<&'a TypeDescriptor>,
    },
    /// `T`
    Variable(&'a TypeVariable),
}

impl TypeDescriptor {
    /// The universal top, `Object`.
    pub const fn object() -> Self {
        TypeDescriptor(Repr::Named(ClassId::OBJECT))
    }

    /// A type variable passed through unchanged.
    pub fn variable(var: TypeVariable) -> Self {
        TypeDescriptor(Repr::Variable(var))
    }

    /// An array of `component`.
    ///
    /// Components are descriptors, so they are already canonical.
    pub fn array_of(component: TypeDescriptor) -> Self {
        TypeDescriptor(Repr::ArrayOf(Box::new(component)))
    }

    /// Borrowed view for matching.
    pub fn shape(&self) -> Shape<'_> {
        match &self.0 {
            Repr::Named(id) => Shape::Named(*id),
            Repr::ArrayOf(component) => Shape::ArrayOf(component),
            Repr::Parameterized { owner, raw, args } => Shape::Parameterized {
                owner: owner.as_deref(),
                raw,
                args,
            },
            Repr::Wildcard { upper, lower } => Shape::Wildcard {
                upper,
                lower: lower.as_deref(),
            },
            Repr::Variable(var) => Shape::Variable(var),
        }
    }

    /// Kind of this descriptor.
    #[inline]
    pub fn tag(&self) -> Tag {
        match &self.0 {
            Repr::Named(_) => Tag::Named,
            Repr::ArrayOf(_) => Tag::Array,
            Repr::Parameterized { .. } => Tag::Parameterized,
            Repr::Wildcard { .. } => Tag::Wildcard,
            Repr::Variable(_) => Tag::Variable,
        }
    }

    /// The class of a `Named` descriptor.
    #[inline]
    pub fn as_class(&self) -> Option<ClassId> {
        match self.0 {
            Repr::Named(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this is the universal top `Object`.
    #[inline]
    pub fn is_object(&self) -> bool {
        self.as_class() == Some(ClassId::OBJECT)
    }

    /// Element type of an array.
    pub fn component(&self) -> Option<&TypeDescriptor> {
        match &self.0 {
            Repr::ArrayOf(component) => Some(component),
            _ => None,
        }
    }

    /// Raw type of a parameterized type.
    pub fn raw_type(&self) -> Option<&TypeDescriptor> {
        match &self.0 {
            Repr::Parameterized { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Owner type of a parameterized member class.
    pub fn owner_type(&self) -> Option<&TypeDescriptor> {
        match &self.0 {
            Repr::Parameterized { owner, .. } => owner.as_deref(),
            _ => None,
        }
    }

    /// Actual type arguments; empty for anything but a parameterized type.
    pub fn type_arguments(&self) -> &[TypeDescriptor] {
        match &self.0 {
            Repr::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// Upper bound of a wildcard.
    pub fn upper_bound(&self) -> Option<&TypeDescriptor> {
        match &self.0 {
            Repr::Wildcard { upper, .. } => Some(upper),
            _ => None,
        }
    }

    /// Lower bound of a wildcard.
    pub fn lower_bound(&self) -> Option<&TypeDescriptor> {
        match &self.0 {
            Repr::Wildcard { lower, .. } => lower.as_deref(),
            _ => None,
        }
    }

    /// The type variable, for the passthrough case.
    pub fn as_variable(&self) -> Option<&TypeVariable> {
        match &self.0 {
            Repr::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Check if a type variable occurs anywhere in this descriptor.
    pub fn contains_variable(&self) -> bool {
        match self.shape() {
            Shape::Named(_) => false,
            Shape::Variable(_) => true,
            Shape::ArrayOf(component) => component.contains_variable(),
            Shape::Parameterized { owner, raw, args } => {
                owner.is_some_and(TypeDescriptor::contains_variable)
                    || raw.contains_variable()
                    || args.iter().any(TypeDescriptor::contains_variable)
            }
            Shape::Wildcard { upper, lower } => {
                upper.contains_variable() || lower.is_some_and(TypeDescriptor::contains_variable)
            }
        }
    }

    /// Visit every class handle mentioned by this descriptor.
    pub(crate) fn for_each_class(&self, f: &mut impl FnMut(ClassId)) {
        match self.shape() {
            Shape::Named(id) => f(id),
            Shape::ArrayOf(component) => component.for_each_class(f),
            Shape::Parameterized { owner, raw, args } => {
                if let Some(owner) = owner {
                    owner.for_each_class(f);
                }
                raw.for_each_class(f);
                for arg in args {
                    arg.for_each_class(f);
                }
            }
            Shape::Wildcard { upper, lower } => {
                upper.for_each_class(f);
                if let Some(lower) = lower {
                    lower.for_each_class(f);
                }
            }
            Shape::Variable(var) => {
                if let Some(id) = var.declared_by {
                    f(id);
                }
            }
        }
    }
}

/// Structural equality of two descriptors.
#[inline]
pub fn equal_descriptors(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    a == b
}

/// Structural hash of a descriptor.
///
/// Equal descriptors always hash to the same value.
pub fn hash_descriptor(desc: &TypeDescriptor) -> u64 {
    let mut hasher = FxHasher::default();
    desc.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests;
