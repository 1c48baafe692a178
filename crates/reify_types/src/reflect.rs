//! The reflective capability the engine consumes.
//!
//! Rust erases nothing it could later recover: there is no runtime record of
//! "the generic superclass of this type". The engine therefore asks a
//! `Reflect` implementation for class metadata instead of discovering it.
//! [`ClassTable`](crate::ClassTable) satisfies it through explicit
//! registration; other hosts (a JVM bridge, a class-file reader) can provide
//! their own.

use std::any::TypeId;

use crate::{ClassDef, ClassId, RawType};

/// Read access to class declarations.
pub trait Reflect {
    /// Declaration of `class`, or `None` if the handle is not known here.
    fn class_def(&self, class: ClassId) -> Option<&ClassDef>;

    /// Handle of the class registered under `name`.
    fn class_named(&self, name: &str) -> Option<ClassId>;

    /// Handle of the class a Rust type was bound to.
    fn class_of_type(&self, ty: TypeId) -> Option<ClassId>;

    /// Declared generic superclass of `class`.
    fn generic_superclass(&self, class: ClassId) -> Option<&RawType> {
        self.class_def(class)?.superclass.as_ref()
    }

    /// Declared generic interfaces of `class`, in declaration order.
    fn generic_interfaces(&self, class: ClassId) -> &[RawType] {
        self.class_def(class)
            .map_or(&[][..], |def| def.interfaces.as_slice())
    }

    /// Registered name of `class`.
    fn class_name(&self, class: ClassId) -> Option<&str> {
        self.class_def(class).map(|def| &*def.name)
    }
}

/// Name of `class` for diagnostics, falling back to its handle.
pub(crate) fn class_label<R: Reflect + ?Sized>(reflect: &R, class: ClassId) -> Box<str> {
    match reflect.class_name(class) {
        Some(name) => name.into(),
        None => class.to_string().into_boxed_str(),
    }
}
