//! Checked descriptor constructors.
//!
//! These are the only ways to build `Named`, `Parameterized` and `Wildcard`
//! descriptors. Each consults the class metadata it needs to enforce the
//! shape invariants and fails with `InvalidTypeShape` otherwise.

use super::{Repr, TypeDescriptor};
use crate::{ClassId, Reflect, ReflectError, ShapeError};

impl TypeDescriptor {
    /// Describe `class`.
    ///
    /// Array classes become `ArrayOf` their (recursively described)
    /// component, so an array class never appears as `Named`.
    pub fn named<R: Reflect + ?Sized>(reflect: &R, class: ClassId) -> Result<Self, ReflectError> {
        let def = reflect
            .class_def(class)
            .ok_or(ReflectError::UnknownClass(class))?;
        match def.component() {
            Some(component) => Ok(Self::array_of(Self::named(reflect, component)?)),
            None => Ok(TypeDescriptor(Repr::Named(class))),
        }
    }

    /// Apply `raw` to `args`, optionally inside `owner`.
    ///
    /// Fails if `raw` is a non-static member class and no owner is given,
    /// or if any argument is a primitive.
    pub fn parameterized<R: Reflect + ?Sized>(
        reflect: &R,
        owner: Option<TypeDescriptor>,
        raw: TypeDescriptor,
        args: Vec<TypeDescriptor>,
    ) -> Result<Self, ReflectError> {
        if owner.is_none() {
            if let Some(class) = raw.as_class() {
                let def = reflect
                    .class_def(class)
                    .ok_or(ReflectError::UnknownClass(class))?;
                if !def.is_static_or_top_level() {
                    return Err(ShapeError::MissingOwner {
                        raw: def.name.clone(),
                    }
                    .into());
                }
            }
        }

        if let Some(name) = args.iter().find_map(|arg| primitive_name(reflect, arg)) {
            return Err(ShapeError::PrimitiveArgument(name).into());
        }

        Ok(TypeDescriptor(Repr::Parameterized {
            owner: owner.map(Box::new),
            raw: Box::new(raw),
            args: args.into_boxed_slice(),
        }))
    }

    /// Build a wildcard from bound lists as reflection reports them.
    ///
    /// An empty upper list means `Object`. At most one bound of each kind is
    /// accepted, no bound may be primitive, and a lower bound requires the
    /// upper bound to be `Object`.
    pub fn wildcard<R: Reflect + ?Sized>(
        reflect: &R,
        upper: Vec<TypeDescriptor>,
        lower: Vec<TypeDescriptor>,
    ) -> Result<Self, ReflectError> {
        if lower.len() > 1 {
            return Err(ShapeError::MultipleLowerBounds(lower.len()).into());
        }
        if upper.len() > 1 {
            return Err(ShapeError::MultipleUpperBounds(upper.len()).into());
        }

        let upper = upper.into_iter().next().unwrap_or_else(Self::object);
        let lower = lower.into_iter().next();

        match &lower {
            Some(bound) => {
                if let Some(name) = primitive_name(reflect, bound) {
                    return Err(ShapeError::PrimitiveBound(name).into());
                }
                if !upper.is_object() {
                    return Err(ShapeError::LowerBoundWithUpper.into());
                }
            }
            None => {
                if let Some(name) = primitive_name(reflect, &upper) {
                    return Err(ShapeError::PrimitiveBound(name).into());
                }
            }
        }

        Ok(TypeDescriptor(Repr::Wildcard {
            upper: Box::new(upper),
            lower: lower.map(Box::new),
        }))
    }

    /// The unbounded wildcard `?`.
    pub fn unbounded_wildcard() -> Self {
        TypeDescriptor(Repr::Wildcard {
            upper: Box::new(Self::object()),
            lower: None,
        })
    }

    /// `? extends bound`.
    pub fn wildcard_extends<R: Reflect + ?Sized>(
        reflect: &R,
        bound: TypeDescriptor,
    ) -> Result<Self, ReflectError> {
        Self::wildcard(reflect, vec![bound], Vec::new())
    }

    /// `? super bound`.
    pub fn wildcard_super<R: Reflect + ?Sized>(
        reflect: &R,
        bound: TypeDescriptor,
    ) -> Result<Self, ReflectError> {
        Self::wildcard(reflect, Vec::new(), vec![bound])
    }
}

/// Name of the primitive `desc` denotes, if it is one.
fn primitive_name<R: Reflect + ?Sized>(reflect: &R, desc: &TypeDescriptor) -> Option<Box<str>> {
    let class = desc.as_class()?;
    reflect
        .class_def(class)
        .filter(|def| def.is_primitive())
        .map(|def| def.name.clone())
}
