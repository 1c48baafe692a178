use super::*;

#[test]
fn class_extends_object_by_default() {
    let def = ClassDef::class("Widget");
    assert_eq!(def.kind, ClassKind::Class);
    assert_eq!(def.superclass, Some(RawType::Class(ClassId::OBJECT)));
    assert!(def.interfaces.is_empty());
    assert!(def.is_static_or_top_level());
}

#[test]
fn interface_has_no_superclass() {
    let def = ClassDef::interface("Supplier").with_type_params(["T"]);
    assert!(def.is_interface());
    assert!(def.modifiers.is_abstract());
    assert_eq!(def.superclass, None);
    assert_eq!(def.arity(), 1);
}

#[test]
fn member_classes_need_static_to_skip_owner() {
    let outer = ClassId::from_raw(20);

    let inner = ClassDef::class("Outer$Inner").nested_in(outer);
    assert!(!inner.is_static_or_top_level());

    let nested = ClassDef::class("Outer$Nested")
        .nested_in(outer)
        .with_modifiers(Modifiers::STATIC);
    assert!(nested.is_static_or_top_level());

    let entry = ClassDef::interface("Outer$Entry").nested_in(outer);
    assert!(!entry.modifiers.is_static());
    assert!(entry.is_static_or_top_level());
}

#[test]
fn array_and_primitive_kinds() {
    let arr = ClassDef::array("int[]".to_owned(), ClassId::INT);
    assert!(arr.is_array());
    assert_eq!(arr.component(), Some(ClassId::INT));
    assert!(!arr.is_primitive());

    let prim = ClassDef::primitive("int");
    assert!(prim.is_primitive());
    assert_eq!(prim.component(), None);
}

#[test]
fn interfaces_keep_declaration_order() {
    let first = RawType::Class(ClassId::from_raw(30));
    let second = RawType::Class(ClassId::from_raw(31));
    let def = ClassDef::class("Both")
        .implements(first.clone())
        .implements(second.clone());
    assert_eq!(def.interfaces, vec![first, second]);
}
