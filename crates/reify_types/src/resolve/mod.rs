//! Type-argument resolution over declared supertypes.
//!
//! Given a class, read the generic shape of its direct superclass or of its
//! first directly implemented interface and return the canonicalized first
//! type argument. This is how a type token recovers `List<String>` from
//! `class StringList extends TypeToken<List<String>>`.
//!
//! Only argument 0 of a single relationship is ever extracted. Additional
//! interfaces are never consulted.

use std::any::{type_name, Any, TypeId};

use crate::reflect::class_label;
use crate::{
    canonicalize, ClassId, ClassTable, RawType, Reflect, ReflectError, ShapeError, Tag,
    TypeDescriptor,
};

/// Something that names a class: a handle, a registered name, or a value
/// whose Rust type is bound to a class.
pub trait AsClass {
    /// Find the class in `reflect`.
    fn as_class<R: Reflect + ?Sized>(&self, reflect: &R) -> Result<ClassId, ReflectError>;
}

impl AsClass for ClassId {
    fn as_class<R: Reflect + ?Sized>(&self, _reflect: &R) -> Result<ClassId, ReflectError> {
        Ok(*self)
    }
}

impl AsClass for &str {
    fn as_class<R: Reflect + ?Sized>(&self, reflect: &R) -> Result<ClassId, ReflectError> {
        reflect
            .class_named(self)
            .ok_or_else(|| ReflectError::UnknownClassName((*self).into()))
    }
}

/// A value, resolved through the class its Rust type is bound to.
#[derive(Clone, Copy, Debug)]
pub struct Instance<'a, T>(pub &'a T);

impl<T: Any> AsClass for Instance<'_, T> {
    fn as_class<R: Reflect + ?Sized>(&self, reflect: &R) -> Result<ClassId, ReflectError> {
        reflect
            .class_of_type(TypeId::of::<T>())
            .ok_or(ReflectError::UnboundType {
                type_name: type_name::<T>(),
            })
    }
}

/// When [`TypeResolver::resolve`] gives up on the interface and tries the
/// superclass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Fall back only when the interface has no type argument to offer.
    /// Any other failure (a malformed shape, an unknown class) is returned
    /// as is, from either relationship.
    #[default]
    MissingOnly,
    /// Fall back on any interface failure, and report any superclass
    /// failure as `MissingTypeParameter`.
    AnyError,
}

/// Resolver settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Interface-to-superclass fallback policy.
    pub fallback: FallbackPolicy,
}

impl ResolverConfig {
    /// Default settings.
    pub const fn new() -> Self {
        Self {
            fallback: FallbackPolicy::MissingOnly,
        }
    }

    /// Use `fallback` as the fallback policy.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Extracts type arguments from declared generic supertypes.
pub struct TypeResolver<'r, R: ?Sized> {
    reflect: &'r R,
    config: ResolverConfig,
}

impl<'r, R: Reflect + ?Sized> TypeResolver<'r, R> {
    /// Resolver with default settings.
    pub fn new(reflect: &'r R) -> Self {
        Self::with_config(reflect, ResolverConfig::default())
    }

    /// Resolver with explicit settings.
    pub fn with_config(reflect: &'r R, config: ResolverConfig) -> Self {
        Self { reflect, config }
    }

    /// Active settings.
    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// First type argument of the declared generic superclass.
    ///
    /// Fails with `MissingTypeParameter` if the superclass is absent or
    /// carries no type arguments, which is what happens when a concrete,
    /// non-generic subclass is queried instead of the type-token subclass.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve_from_superclass(
        &self,
        target: impl AsClass,
    ) -> Result<TypeDescriptor, ReflectError> {
        let class = target.as_class(self.reflect)?;
        self.superclass_argument(class)
    }

    /// First type argument of the first declared generic interface.
    ///
    /// Fails with `MissingGenericInterface` if the class declares no
    /// interfaces, and with `MissingTypeParameter` if the first one is not
    /// parameterized.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve_from_interface(
        &self,
        target: impl AsClass,
    ) -> Result<TypeDescriptor, ReflectError> {
        let class = target.as_class(self.reflect)?;
        self.interface_argument(class)
    }

    /// Interface argument if there is one, superclass argument otherwise.
    ///
    /// Fails with `MissingTypeParameter` when neither relationship yields an
    /// argument.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve(&self, target: impl AsClass) -> Result<TypeDescriptor, ReflectError> {
        let class = target.as_class(self.reflect)?;

        let err = match self.interface_argument(class) {
            Ok(ty) => return Ok(ty),
            Err(err) => err,
        };
        if self.config.fallback == FallbackPolicy::MissingOnly && !err.is_missing_argument() {
            return Err(err);
        }

        tracing::debug!(?class, %err, "interface gave no type argument, trying superclass");
        self.superclass_argument(class).map_err(|err| {
            if self.config.fallback == FallbackPolicy::MissingOnly && !err.is_missing_argument() {
                err
            } else {
                self.missing_type_parameter(class)
            }
        })
    }

    fn superclass_argument(&self, class: ClassId) -> Result<TypeDescriptor, ReflectError> {
        self.ensure_known(class)?;
        match self.reflect.generic_superclass(class) {
            Some(superclass) => self.first_argument(class, superclass),
            None => Err(self.missing_type_parameter(class)),
        }
    }

    fn interface_argument(&self, class: ClassId) -> Result<TypeDescriptor, ReflectError> {
        self.ensure_known(class)?;
        match self.reflect.generic_interfaces(class).first() {
            Some(interface) => self.first_argument(class, interface),
            None => Err(ReflectError::MissingGenericInterface {
                class: class_label(self.reflect, class),
            }),
        }
    }

    /// Canonicalized argument 0 of a declared supertype.
    fn first_argument(
        &self,
        class: ClassId,
        relationship: &RawType,
    ) -> Result<TypeDescriptor, ReflectError> {
        tracing::trace!(?class, shape = relationship.kind_name(), "reading first type argument");
        match relationship {
            RawType::Parameterized { args, .. } => match args.first() {
                Some(arg) => canonicalize(self.reflect, arg),
                None => Err(self.missing_type_parameter(class)),
            },
            RawType::Descriptor(desc) if desc.tag() == Tag::Parameterized => {
                match desc.type_arguments().first() {
                    Some(arg) => Ok(arg.clone()),
                    None => Err(self.missing_type_parameter(class)),
                }
            }
            RawType::Class(_) => Err(self.missing_type_parameter(class)),
            RawType::Descriptor(desc) if desc.tag() == Tag::Named => {
                Err(self.missing_type_parameter(class))
            }
            other => Err(ShapeError::UnsupportedSupertype(other.kind_name()).into()),
        }
    }

    fn ensure_known(&self, class: ClassId) -> Result<(), ReflectError> {
        match self.reflect.class_def(class) {
            Some(_) => Ok(()),
            None => Err(ReflectError::UnknownClass(class)),
        }
    }

    fn missing_type_parameter(&self, class: ClassId) -> ReflectError {
        ReflectError::MissingTypeParameter {
            class: class_label(self.reflect, class),
        }
    }
}

impl ClassTable {
    /// Resolver over this table with default settings.
    pub fn resolver(&self) -> TypeResolver<'_, Self> {
        TypeResolver::new(self)
    }
}
