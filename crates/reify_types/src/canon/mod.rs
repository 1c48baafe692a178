//! Canonicalization of raw type shapes.
//!
//! Reflective queries do not promise identical, or even equal, answers for
//! the same declared type: one path may report `String[]` as an array
//! class, another as a generic array of `String`; wildcards come back as
//! bound lists. `canonicalize` rewrites every shape into a
//! [`TypeDescriptor`] so that structurally identical types compare equal no
//! matter which query produced them.
//!
//! # Rules
//!
//! | Input | Output |
//! |---|---|
//! | array class | `ArrayOf(canonicalize(component))` |
//! | other class | `Named` (fixed point) |
//! | parameterized | owner, raw and every argument canonicalized |
//! | generic array | `ArrayOf(canonicalize(component))` |
//! | wildcard | bounds canonicalized, wildcard invariants checked |
//! | type variable | passed through unchanged |
//! | descriptor | returned unchanged (already canonical) |
//!
//! The function is idempotent: feeding a result back in as
//! [`RawType::Descriptor`] returns it unchanged.

use crate::{RawType, Reflect, ReflectError, TypeDescriptor};

/// Rewrite `ty` into its canonical descriptor.
#[tracing::instrument(level = "trace", skip_all, fields(kind = ty.kind_name()))]
pub fn canonicalize<R: Reflect + ?Sized>(
    reflect: &R,
    ty: &RawType,
) -> Result<TypeDescriptor, ReflectError> {
    canonicalize_shape(reflect, ty)
}

fn canonicalize_shape<R: Reflect + ?Sized>(
    reflect: &R,
    ty: &RawType,
) -> Result<TypeDescriptor, ReflectError> {
    match ty {
        RawType::Class(class) => TypeDescriptor::named(reflect, *class),

        RawType::Parameterized { owner, raw, args } => {
            let owner = owner
                .as_deref()
                .map(|owner| canonicalize_shape(reflect, owner))
                .transpose()?;
            let raw = canonicalize_shape(reflect, raw)?;
            let args = canonicalize_all(reflect, args)?;
            TypeDescriptor::parameterized(reflect, owner, raw, args)
        }

        RawType::GenericArray(component) => Ok(TypeDescriptor::array_of(canonicalize_shape(
            reflect, component,
        )?)),

        RawType::Wildcard { upper, lower } => {
            let upper = canonicalize_all(reflect, upper)?;
            let lower = canonicalize_all(reflect, lower)?;
            TypeDescriptor::wildcard(reflect, upper, lower)
        }

        RawType::Variable(var) => Ok(TypeDescriptor::variable(var.clone())),

        RawType::Descriptor(desc) => Ok(desc.clone()),
    }
}

fn canonicalize_all<R: Reflect + ?Sized>(
    reflect: &R,
    types: &[RawType],
) -> Result<Vec<TypeDescriptor>, ReflectError> {
    types
        .iter()
        .map(|ty| canonicalize_shape(reflect, ty))
        .collect()
}

#[cfg(test)]
mod tests;
