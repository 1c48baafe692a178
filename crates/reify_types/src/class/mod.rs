//! Class declarations.
//!
//! A `ClassDef` is the metadata a reflective runtime would expose for one
//! class: its name, kind, modifiers, enclosing class, declared type
//! parameters, and the *generic* shapes of its direct superclass and
//! interfaces in declaration order. The resolver reads nothing else.

use crate::{ClassId, Modifiers, RawType};

/// The kind of a declared class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// An ordinary class.
    Class,
    /// An interface.
    Interface,
    /// A primitive such as `int` (never a valid type argument or bound).
    Primitive,
    /// An array class whose elements are `component`.
    Array {
        /// Element class.
        component: ClassId,
    },
}

/// A registered class declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassDef {
    /// Fully qualified name, unique within a table.
    pub name: Box<str>,

    /// What kind of class this is.
    pub kind: ClassKind,

    /// Declaration modifiers.
    pub modifiers: Modifiers,

    /// The class this one is a member of, if any.
    pub enclosing: Option<ClassId>,

    /// Declared type parameter names (e.g. `K`, `V` in `Map<K, V>`).
    pub type_params: Vec<Box<str>>,

    /// Declared generic superclass. `None` for `Object`, interfaces and
    /// primitives.
    pub superclass: Option<RawType>,

    /// Declared generic interfaces, in declaration order.
    pub interfaces: Vec<RawType>,
}

impl ClassDef {
    fn new(name: impl Into<Box<str>>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::PUBLIC,
            enclosing: None,
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    /// Declare an ordinary class extending `Object`.
    pub fn class(name: impl Into<Box<str>>) -> Self {
        Self::new(name, ClassKind::Class).extends(RawType::Class(ClassId::OBJECT))
    }

    /// Declare an interface.
    pub fn interface(name: impl Into<Box<str>>) -> Self {
        let mut def = Self::new(name, ClassKind::Interface);
        def.modifiers |= Modifiers::ABSTRACT;
        def
    }

    pub(crate) fn root(name: &'static str) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub(crate) fn primitive(name: &'static str) -> Self {
        let mut def = Self::new(name, ClassKind::Primitive);
        def.modifiers |= Modifiers::FINAL;
        def
    }

    pub(crate) fn array(name: String, component: ClassId) -> Self {
        let mut def = Self::new(name, ClassKind::Array { component });
        def.modifiers |= Modifiers::FINAL;
        def.superclass = Some(RawType::Class(ClassId::OBJECT));
        def
    }

    /// Set the declared type parameters.
    #[must_use]
    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Add modifiers to the declaration.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Declare this class as a member of `outer`.
    #[must_use]
    pub fn nested_in(mut self, outer: ClassId) -> Self {
        self.enclosing = Some(outer);
        self
    }

    /// Replace the declared superclass.
    #[must_use]
    pub fn extends(mut self, superclass: RawType) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Append a declared interface.
    #[must_use]
    pub fn implements(mut self, interface: RawType) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Check if this is an array class.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self.kind, ClassKind::Array { .. })
    }

    /// Element class of an array class.
    #[inline]
    pub fn component(&self) -> Option<ClassId> {
        match self.kind {
            ClassKind::Array { component } => Some(component),
            _ => None,
        }
    }

    /// Check if this is a primitive.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.kind == ClassKind::Primitive
    }

    /// Check if this is an interface.
    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Check if the class is top-level or a static member class.
    ///
    /// Only non-static member classes need an owner when parameterized.
    /// Member interfaces are implicitly static.
    #[inline]
    pub fn is_static_or_top_level(&self) -> bool {
        self.modifiers.is_static() || self.is_interface() || self.enclosing.is_none()
    }

    /// Number of declared type parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.type_params.len()
    }
}

#[cfg(test)]
mod tests;
