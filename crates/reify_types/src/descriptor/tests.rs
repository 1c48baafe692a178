#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::test_support::Fixture;
use crate::{canonicalize, RawType};
use pretty_assertions::assert_eq;

#[test]
fn object_is_the_universal_top() {
    let top = TypeDescriptor::object();
    assert_eq!(top.tag(), Tag::Named);
    assert_eq!(top.as_class(), Some(ClassId::OBJECT));
    assert!(top.is_object());
}

#[test]
fn accessors_follow_the_active_variant() {
    let fx = Fixture::new();
    let string = TypeDescriptor::named(&fx.table, fx.string).expect("String");
    let list = TypeDescriptor::named(&fx.table, fx.list).expect("List");
    let list_of_string =
        TypeDescriptor::parameterized(&fx.table, None, list.clone(), vec![string.clone()])
            .expect("List<String>");

    assert_eq!(list_of_string.tag(), Tag::Parameterized);
    assert_eq!(list_of_string.raw_type(), Some(&list));
    assert_eq!(list_of_string.owner_type(), None);
    assert_eq!(list_of_string.type_arguments(), &[string.clone()]);
    assert_eq!(list_of_string.component(), None);
    assert_eq!(list_of_string.as_class(), None);

    let array = TypeDescriptor::array_of(string.clone());
    assert_eq!(array.tag(), Tag::Array);
    assert_eq!(array.component(), Some(&string));
    assert!(array.type_arguments().is_empty());

    let var = TypeDescriptor::variable(TypeVariable::new("T", Some(fx.list)));
    assert_eq!(var.tag(), Tag::Variable);
    assert_eq!(var.as_variable().map(|v| &*v.name), Some("T"));
    assert_eq!(var.upper_bound(), None);
}

#[test]
fn shape_view_matches_tag() {
    let fx = Fixture::new();
    let number = TypeDescriptor::named(&fx.table, fx.number).expect("Number");
    let wildcard = TypeDescriptor::wildcard_extends(&fx.table, number.clone()).expect("wildcard");

    match wildcard.shape() {
        Shape::Wildcard { upper, lower } => {
            assert_eq!(upper, &number);
            assert_eq!(lower, None);
        }
        other => panic!("expected wildcard, got {other:?}"),
    }
    assert_eq!(wildcard.upper_bound(), Some(&number));
    assert_eq!(wildcard.lower_bound(), None);
}

#[test]
fn equality_is_structural() {
    let fx = Fixture::new();

    // Built by hand
    let string = TypeDescriptor::named(&fx.table, fx.string).expect("String");
    let list = TypeDescriptor::named(&fx.table, fx.list).expect("List");
    let by_hand =
        TypeDescriptor::parameterized(&fx.table, None, list, vec![string]).expect("List<String>");

    // Canonicalized from a reflective shape
    let reflected = canonicalize(&fx.table, &fx.list_of(RawType::Class(fx.string)))
        .expect("List<String>");

    assert!(equal_descriptors(&by_hand, &reflected));
    assert_eq!(hash_descriptor(&by_hand), hash_descriptor(&reflected));
}

#[test]
fn different_types_are_not_equal() {
    let fx = Fixture::new();
    let string = TypeDescriptor::named(&fx.table, fx.string).expect("String");
    let integer = TypeDescriptor::named(&fx.table, fx.integer).expect("Integer");

    assert!(!equal_descriptors(&string, &integer));
    assert!(!equal_descriptors(
        &TypeDescriptor::array_of(string.clone()),
        &string
    ));
    assert!(!equal_descriptors(
        &TypeDescriptor::unbounded_wildcard(),
        &TypeDescriptor::object()
    ));
}

#[test]
fn contains_variable_searches_every_position() {
    let fx = Fixture::new();
    let t = RawType::variable("T", Some(fx.list));
    let closed = canonicalize(&fx.table, &fx.list_of(RawType::Class(fx.string))).expect("closed");
    assert!(!closed.contains_variable());

    for open in [
        t.clone(),
        fx.list_of(t.clone()),
        RawType::generic_array(t.clone()),
        fx.list_of(RawType::wildcard_super(t.clone())),
        RawType::member(
            RawType::parameterized(fx.outer, [t]),
            fx.inner,
            [RawType::Class(fx.string)],
        ),
    ] {
        let desc = canonicalize(&fx.table, &open).expect("open");
        assert!(desc.contains_variable(), "{open:?}");
    }
}

#[test]
fn for_each_class_visits_owner_raw_and_arguments() {
    let fx = Fixture::new();
    let desc = canonicalize(
        &fx.table,
        &RawType::member(
            RawType::Class(fx.outer),
            fx.inner,
            [RawType::wildcard_super(RawType::Class(fx.integer))],
        ),
    )
    .expect("Outer.Inner<? super Integer>");

    let mut seen = Vec::new();
    desc.for_each_class(&mut |id| seen.push(id));
    assert_eq!(
        seen,
        vec![fx.outer, fx.inner, ClassId::OBJECT, fx.integer]
    );
}

#[test]
fn descriptors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeDescriptor>();
}

#[cfg(feature = "serde")]
#[test]
fn descriptors_are_serializable() {
    fn assert_serialize<T: serde::Serialize>(_: &T) {}

    let fx = Fixture::new();
    let desc = canonicalize(
        &fx.table,
        &fx.list_of(RawType::wildcard_extends(RawType::variable("T", Some(fx.list)))),
    )
    .expect("List<? extends T>");

    assert_serialize(&desc);
    assert_serialize(&fx.string);
    assert_serialize(&desc.tag());
    assert_serialize(&TypeVariable::new("E", None));
}
