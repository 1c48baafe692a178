//! Type tokens.
//!
//! A type token captures a type argument by declaring a subclass of the
//! abstract generic base `TypeToken<T>` with `T` fixed, then reading the
//! argument back off that subclass's declared superclass:
//!
//! ```
//! use reify_types::{ClassDef, ClassTable, RawType, TypeToken};
//!
//! struct StringList;
//!
//! let mut table = ClassTable::new();
//! let string = table.register(ClassDef::class("String"))?;
//! let list = table.register(ClassDef::interface("List").with_type_params(["E"]))?;
//! table.register_token::<StringList>(
//!     "StringList",
//!     RawType::parameterized(list, [RawType::Class(string)]),
//! )?;
//!
//! let token = TypeToken::<StringList>::new(&table)?;
//! assert_eq!(token.captured_type().display(&table).to_string(), "List<String>");
//! # Ok::<(), reify_types::ReflectError>(())
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::reflect::class_label;
use crate::{
    ClassDef, ClassId, ClassTable, Modifiers, RawType, Reflect, ReflectError, TypeDescriptor,
    TypeResolver,
};

/// A type argument captured from the declaring subclass `S`.
///
/// `S` is a Rust marker type bound to a class whose declared superclass is
/// `TypeToken<T>` with a concrete `T`. The descriptor of `T` is captured
/// once, at construction.
pub struct TypeToken<S: ?Sized> {
    ty: TypeDescriptor,
    marker: PhantomData<fn() -> S>,
}

impl<S: Any> TypeToken<S> {
    /// Capture the type argument `S`'s class fixes on its superclass.
    ///
    /// Fails with `MissingTypeParameter` if `S`'s class extends a
    /// non-generic superclass, or if the argument it supplies still mentions
    /// a type variable anywhere (`T`, `List<T>`, `? extends T`).
    pub fn new<R: Reflect + ?Sized>(reflect: &R) -> Result<Self, ReflectError> {
        let class = reflect
            .class_of_type(TypeId::of::<S>())
            .ok_or(ReflectError::UnboundType {
                type_name: type_name::<S>(),
            })?;

        let ty = TypeResolver::new(reflect).resolve_from_superclass(class)?;
        if ty.contains_variable() {
            return Err(ReflectError::MissingTypeParameter {
                class: class_label(reflect, class),
            });
        }

        tracing::trace!(?class, "captured type token");
        Ok(Self {
            ty,
            marker: PhantomData,
        })
    }
}

impl<S: ?Sized> TypeToken<S> {
    /// The captured type argument.
    pub fn captured_type(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Give up the token, keeping its descriptor.
    pub fn into_type(self) -> TypeDescriptor {
        self.ty
    }
}

impl<S: ?Sized> Clone for TypeToken<S> {
    fn clone(&self) -> Self {
        Self {
            ty: self.ty.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: ?Sized> PartialEq for TypeToken<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl<S: ?Sized> Eq for TypeToken<S> {}

impl<S: ?Sized> Hash for TypeToken<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
    }
}

impl<S: ?Sized> fmt::Debug for TypeToken<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeToken").field(&self.ty).finish()
    }
}

impl ClassTable {
    /// Declare the anonymous subclass `S extends TypeToken<argument>`.
    ///
    /// The class is registered as final and anonymous, and the Rust marker
    /// type `S` is bound to it so [`TypeToken::<S>::new`](TypeToken::new)
    /// can find it.
    pub fn register_token<S: Any>(
        &mut self,
        name: impl Into<Box<str>>,
        argument: RawType,
    ) -> Result<ClassId, ReflectError> {
        let def = ClassDef::class(name)
            .with_modifiers(Modifiers::FINAL | Modifiers::ANONYMOUS)
            .extends(RawType::parameterized(ClassId::TYPE_TOKEN, [argument]));
        self.register_type::<S>(def)
    }
}
