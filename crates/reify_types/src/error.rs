//! Errors reported by canonicalization, resolution and class registration.

use thiserror::Error;

use crate::ClassId;

/// Error returned by every fallible operation in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// Interface-based resolution was requested but the class declares no
    /// interfaces.
    #[error("missing generic interface: `{class}` implements no interfaces")]
    MissingGenericInterface {
        /// Name of the queried class.
        class: Box<str>,
    },

    /// The consulted generic relationship carries no actual type arguments.
    #[error("missing type parameter: the supertype consulted for `{class}` has no type arguments")]
    MissingTypeParameter {
        /// Name of the queried class.
        class: Box<str>,
    },

    /// A descriptor was asked to be built from an illegal combination of
    /// owner, arguments or bounds.
    #[error("invalid type shape: {0}")]
    InvalidTypeShape(#[from] ShapeError),

    /// The handle does not belong to the table being queried.
    #[error("unknown class {0:?}")]
    UnknownClass(ClassId),

    /// No class is registered under the name.
    #[error("no class named `{0}`")]
    UnknownClassName(Box<str>),

    /// The Rust type was never bound to a class.
    #[error("type `{type_name}` is not bound to a class")]
    UnboundType {
        /// `std::any::type_name` of the Rust type.
        type_name: &'static str,
    },

    /// A class with the same name is already registered.
    #[error("class `{0}` is already registered")]
    DuplicateClass(Box<str>),
}

impl ReflectError {
    /// Check if this error only says that no type argument could be found.
    ///
    /// These are the failures the resolver's interface-to-superclass
    /// fallback is allowed to swallow.
    pub fn is_missing_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingGenericInterface { .. } | Self::MissingTypeParameter { .. }
        )
    }
}

/// The invariant a rejected descriptor shape violated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Non-static member classes must be parameterized with their owner.
    #[error("`{raw}` is a non-static member class and needs an owner type")]
    MissingOwner {
        /// Name of the raw class.
        raw: Box<str>,
    },

    /// Primitives cannot be type arguments.
    #[error("primitive `{0}` cannot be a type argument")]
    PrimitiveArgument(Box<str>),

    /// Wildcards carry at most one upper bound.
    #[error("wildcard has {0} upper bounds, expected at most one")]
    MultipleUpperBounds(usize),

    /// Wildcards carry at most one lower bound.
    #[error("wildcard has {0} lower bounds, expected at most one")]
    MultipleLowerBounds(usize),

    /// Primitives cannot bound a wildcard.
    #[error("primitive `{0}` cannot bound a wildcard")]
    PrimitiveBound(Box<str>),

    /// A lower-bounded wildcard must keep the universal upper bound.
    #[error("a wildcard with a lower bound must have `Object` as its upper bound")]
    LowerBoundWithUpper,

    /// Declared supertypes must be a class or a parameterized class.
    #[error("a declared supertype must be a class or a parameterized class, found a {0} shape")]
    UnsupportedSupertype(&'static str),
}
