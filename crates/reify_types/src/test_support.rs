//! Shared class fixtures for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use crate::{ClassDef, ClassId, ClassTable, Modifiers, RawType};

/// A table pre-loaded with a small collections-style hierarchy.
pub(crate) struct Fixture {
    pub table: ClassTable,
    pub string: ClassId,
    pub number: ClassId,
    pub integer: ClassId,
    pub list: ClassId,
    pub map: ClassId,
    pub comparable: ClassId,
    pub outer: ClassId,
    pub inner: ClassId,
    pub nested: ClassId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut table = ClassTable::new();
        let string = table.register(ClassDef::class("String")).expect("String");
        let number = table
            .register(ClassDef::class("Number").with_modifiers(Modifiers::ABSTRACT))
            .expect("Number");
        let integer = table
            .register(ClassDef::class("Integer").extends(RawType::Class(number)))
            .expect("Integer");
        let list = table
            .register(ClassDef::interface("List").with_type_params(["E"]))
            .expect("List");
        let map = table
            .register(ClassDef::interface("Map").with_type_params(["K", "V"]))
            .expect("Map");
        let comparable = table
            .register(ClassDef::interface("Comparable").with_type_params(["T"]))
            .expect("Comparable");
        let outer = table
            .register(ClassDef::class("Outer").with_type_params(["O"]))
            .expect("Outer");
        let inner = table
            .register(
                ClassDef::class("Outer$Inner")
                    .with_type_params(["I"])
                    .nested_in(outer),
            )
            .expect("Outer$Inner");
        let nested = table
            .register(
                ClassDef::class("Outer$Nested")
                    .with_type_params(["N"])
                    .with_modifiers(Modifiers::STATIC)
                    .nested_in(outer),
            )
            .expect("Outer$Nested");

        Self {
            table,
            string,
            number,
            integer,
            list,
            map,
            comparable,
            outer,
            inner,
            nested,
        }
    }

    /// `List<arg>` as reflection would report it.
    pub fn list_of(&self, arg: RawType) -> RawType {
        RawType::parameterized(self.list, [arg])
    }
}
