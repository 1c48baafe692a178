//! Registration-based class metadata.
//!
//! The `ClassTable` stands in for a runtime's reflective subsystem: callers
//! declare their classes (including each class's generic superclass and
//! interfaces) up front, and the engine queries the table through
//! [`Reflect`].
//!
//! # Design
//!
//! - One `ClassId` per class name, so repeated lookups yield equal handles
//! - `Object`, the primitives and `TypeToken<T>` are pre-registered at the
//!   fixed indices named on [`ClassId`]
//! - Array classes are interned per component via [`ClassTable::array_class`]
//! - Rust types can be bound to classes (`TypeId` index), which is how a
//!   value finds "its class"
//! - Declared supertypes are validated on registration, so resolution only
//!   ever sees class or parameterized-class supertypes

use std::any::{type_name, Any, TypeId};

use rustc_hash::FxHashMap;

use crate::{ClassDef, ClassId, Modifiers, RawType, Reflect, ReflectError, ShapeError};

/// Registry of class declarations.
#[derive(Clone, Debug)]
pub struct ClassTable {
    /// Declarations indexed by `ClassId::raw()`.
    classes: Vec<ClassDef>,

    /// Name -> handle.
    by_name: FxHashMap<Box<str>, ClassId>,

    /// Rust type -> handle.
    by_type: FxHashMap<TypeId, ClassId>,
}

impl ClassTable {
    /// Create a table holding only the pre-registered classes.
    pub fn new() -> Self {
        let prelude = [
            ClassDef::root("Object"),
            ClassDef::primitive("boolean"),
            ClassDef::primitive("byte"),
            ClassDef::primitive("char"),
            ClassDef::primitive("short"),
            ClassDef::primitive("int"),
            ClassDef::primitive("long"),
            ClassDef::primitive("float"),
            ClassDef::primitive("double"),
            ClassDef::primitive("void"),
            ClassDef::root("TypeToken")
                .with_type_params(["T"])
                .with_modifiers(Modifiers::ABSTRACT)
                .extends(RawType::Class(ClassId::OBJECT)),
        ];

        let mut table = Self {
            classes: Vec::with_capacity(64),
            by_name: FxHashMap::default(),
            by_type: FxHashMap::default(),
        };
        for (raw, def) in (0u32..).zip(prelude) {
            debug_assert_eq!(ClassId::from_raw(raw).name(), Some(&*def.name));
            table.by_name.insert(def.name.clone(), ClassId::from_raw(raw));
            table.classes.push(def);
        }
        table
    }

    /// Number of registered classes, prelude included.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the table holds no classes. Never true after [`ClassTable::new`].
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Declaration of `class`.
    pub fn get(&self, class: ClassId) -> Option<&ClassDef> {
        self.classes.get(class.raw() as usize)
    }

    /// Handle of the class registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over all classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        (0u32..).zip(&self.classes).map(|(raw, def)| (ClassId::from_raw(raw), def))
    }

    /// Register a class declaration.
    ///
    /// Fails if the name is taken, if a declared supertype is neither a
    /// class nor a parameterized class, or if the declaration mentions a
    /// handle this table never issued (a class may mention itself).
    #[tracing::instrument(level = "debug", skip(self, def), fields(name = %def.name))]
    pub fn register(&mut self, def: ClassDef) -> Result<ClassId, ReflectError> {
        if self.by_name.contains_key(&def.name) {
            return Err(ReflectError::DuplicateClass(def.name));
        }

        let id = self.next_id();
        self.validate(id, &def)?;

        self.by_name.insert(def.name.clone(), id);
        self.classes.push(def);
        tracing::debug!(?id, "registered class");
        Ok(id)
    }

    /// Register a class declaration and bind the Rust type `T` to it.
    pub fn register_type<T: Any>(&mut self, def: ClassDef) -> Result<ClassId, ReflectError> {
        let id = self.register(def)?;
        self.by_type.insert(TypeId::of::<T>(), id);
        Ok(id)
    }

    /// Bind the Rust type `T` to an existing class.
    ///
    /// A later binding of the same type replaces the earlier one.
    pub fn bind<T: Any>(&mut self, class: ClassId) -> Result<(), ReflectError> {
        if self.get(class).is_none() {
            return Err(ReflectError::UnknownClass(class));
        }
        self.by_type.insert(TypeId::of::<T>(), class);
        Ok(())
    }

    /// Class the Rust type `T` is bound to.
    pub fn class_of<T: Any>(&self) -> Result<ClassId, ReflectError> {
        self.by_type
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(ReflectError::UnboundType {
                type_name: type_name::<T>(),
            })
    }

    /// The array class whose elements are `component`, registering it on
    /// first use.
    pub fn array_class(&mut self, component: ClassId) -> Result<ClassId, ReflectError> {
        let element = self
            .get(component)
            .ok_or(ReflectError::UnknownClass(component))?;
        let name = format!("{}[]", element.name);

        if let Some(existing) = self.lookup(&name) {
            return match self.get(existing).and_then(ClassDef::component) {
                Some(c) if c == component => Ok(existing),
                _ => Err(ReflectError::DuplicateClass(name.into_boxed_str())),
            };
        }

        self.register(ClassDef::array(name, component))
    }

    /// Replace the declared supertypes of an existing class.
    ///
    /// Needed for declarations that mention the class itself before it has
    /// a handle, e.g. `Node implements Comparable<Node>`.
    pub fn set_supertypes(
        &mut self,
        class: ClassId,
        superclass: Option<RawType>,
        interfaces: Vec<RawType>,
    ) -> Result<(), ReflectError> {
        let mut def = self
            .get(class)
            .cloned()
            .ok_or(ReflectError::UnknownClass(class))?;
        def.superclass = superclass;
        def.interfaces = interfaces;
        self.validate(class, &def)?;

        self.classes[class.raw() as usize] = def;
        tracing::debug!(?class, "updated supertypes");
        Ok(())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "class count stays far below u32::MAX"
    )]
    fn next_id(&self) -> ClassId {
        ClassId::from_raw(self.classes.len() as u32)
    }

    fn validate(&self, own: ClassId, def: &ClassDef) -> Result<(), ReflectError> {
        for supertype in def.superclass.iter().chain(&def.interfaces) {
            check_supertype_shape(supertype)?;
        }

        let mut unknown = None;
        let mut check = |id: ClassId| {
            if id != own && self.get(id).is_none() && unknown.is_none() {
                unknown = Some(id);
            }
        };
        if let Some(outer) = def.enclosing {
            check(outer);
        }
        if let Some(component) = def.component() {
            check(component);
        }
        for supertype in def.superclass.iter().chain(&def.interfaces) {
            supertype.for_each_class(&mut check);
        }

        match unknown {
            Some(id) => Err(ReflectError::UnknownClass(id)),
            None => Ok(()),
        }
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Reflect for ClassTable {
    fn class_def(&self, class: ClassId) -> Option<&ClassDef> {
        self.get(class)
    }

    fn class_named(&self, name: &str) -> Option<ClassId> {
        self.lookup(name)
    }

    fn class_of_type(&self, ty: TypeId) -> Option<ClassId> {
        self.by_type.get(&ty).copied()
    }
}

/// Supertypes are declared as a class or as a parameterized class.
fn check_supertype_shape(ty: &RawType) -> Result<(), ShapeError> {
    match ty {
        RawType::Class(_) => Ok(()),
        RawType::Parameterized { raw, .. } if matches!(**raw, RawType::Class(_)) => Ok(()),
        other => Err(ShapeError::UnsupportedSupertype(other.kind_name())),
    }
}
