//! Raw type shapes as produced by reflective queries.
//!
//! `RawType` is the input side of canonicalization. It mirrors what a
//! reflective runtime hands out: plain class handles (which may denote array
//! classes), parameterized forms, generic-array forms, wildcard forms with
//! bound *lists*, and type variables. None of these are required to be
//! canonical; two shapes of the same declared type may differ.

use crate::{ClassId, TypeDescriptor, TypeVariable};

/// A type shape obtained from reflection or written by hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawType {
    /// A class handle, possibly an array class.
    Class(ClassId),

    /// A generic type applied to arguments.
    Parameterized {
        /// Enclosing type for member classes.
        owner: Option<Box<RawType>>,
        /// The generic class.
        raw: Box<RawType>,
        /// Actual type arguments in declaration order.
        args: Vec<RawType>,
    },

    /// An array whose component is expressed generically (`List<String>[]`).
    GenericArray(Box<RawType>),

    /// A wildcard with its declared bound lists.
    Wildcard {
        /// Upper bounds; empty means `Object`.
        upper: Vec<RawType>,
        /// Lower bounds.
        lower: Vec<RawType>,
    },

    /// A type variable such as `T`.
    Variable(TypeVariable),

    /// An already-canonical descriptor.
    Descriptor(TypeDescriptor),
}

impl RawType {
    /// Parameterize `raw` with `args` and no owner.
    pub fn parameterized(raw: ClassId, args: impl IntoIterator<Item = RawType>) -> Self {
        RawType::Parameterized {
            owner: None,
            raw: Box::new(RawType::Class(raw)),
            args: args.into_iter().collect(),
        }
    }

    /// Parameterize a member class `raw` of `owner` with `args`.
    pub fn member(owner: RawType, raw: ClassId, args: impl IntoIterator<Item = RawType>) -> Self {
        RawType::Parameterized {
            owner: Some(Box::new(owner)),
            raw: Box::new(RawType::Class(raw)),
            args: args.into_iter().collect(),
        }
    }

    /// A generic array of `component`.
    pub fn generic_array(component: RawType) -> Self {
        RawType::GenericArray(Box::new(component))
    }

    /// The unbounded wildcard `?`, as reflection reports it (upper bound `Object`).
    pub fn wildcard() -> Self {
        RawType::Wildcard {
            upper: vec![RawType::Class(ClassId::OBJECT)],
            lower: Vec::new(),
        }
    }

    /// `? extends bound`.
    pub fn wildcard_extends(bound: RawType) -> Self {
        RawType::Wildcard {
            upper: vec![bound],
            lower: Vec::new(),
        }
    }

    /// `? super bound`.
    pub fn wildcard_super(bound: RawType) -> Self {
        RawType::Wildcard {
            upper: vec![RawType::Class(ClassId::OBJECT)],
            lower: vec![bound],
        }
    }

    /// A type variable named `name`, declared by `declared_by`.
    pub fn variable(name: impl Into<Box<str>>, declared_by: Option<ClassId>) -> Self {
        RawType::Variable(TypeVariable::new(name, declared_by))
    }

    /// Name of this shape's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawType::Class(_) => "class",
            RawType::Parameterized { .. } => "parameterized",
            RawType::GenericArray(_) => "generic array",
            RawType::Wildcard { .. } => "wildcard",
            RawType::Variable(_) => "type variable",
            RawType::Descriptor(_) => "descriptor",
        }
    }

    /// Visit every class handle mentioned by this shape.
    pub(crate) fn for_each_class(&self, f: &mut impl FnMut(ClassId)) {
        match self {
            RawType::Class(id) => f(*id),
            RawType::Parameterized { owner, raw, args } => {
                if let Some(owner) = owner {
                    owner.for_each_class(f);
                }
                raw.for_each_class(f);
                for arg in args {
                    arg.for_each_class(f);
                }
            }
            RawType::GenericArray(component) => component.for_each_class(f),
            RawType::Wildcard { upper, lower } => {
                for bound in upper.iter().chain(lower) {
                    bound.for_each_class(f);
                }
            }
            RawType::Variable(var) => {
                if let Some(id) = var.declared_by {
                    f(id);
                }
            }
            RawType::Descriptor(desc) => desc.for_each_class(f),
        }
    }
}

impl From<ClassId> for RawType {
    fn from(id: ClassId) -> Self {
        RawType::Class(id)
    }
}

impl From<TypeDescriptor> for RawType {
    fn from(desc: TypeDescriptor) -> Self {
        RawType::Descriptor(desc)
    }
}
