#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::test_support::Fixture;
use crate::{hash_descriptor, ClassId, ShapeError, TypeVariable};
use pretty_assertions::assert_eq;

#[test]
fn class_is_a_fixed_point() {
    let fx = Fixture::new();
    let desc = canonicalize(&fx.table, &RawType::Class(fx.string)).expect("String");
    assert_eq!(desc.as_class(), Some(fx.string));
}

#[test]
fn array_class_and_generic_array_agree() {
    let mut fx = Fixture::new();
    let string_array = fx.table.array_class(fx.string).expect("String[]");

    let via_class = canonicalize(&fx.table, &RawType::Class(string_array)).expect("class");
    let via_generic =
        canonicalize(&fx.table, &RawType::generic_array(RawType::Class(fx.string))).expect("generic");

    assert_eq!(via_class, via_generic);
    assert_eq!(hash_descriptor(&via_class), hash_descriptor(&via_generic));
    assert_eq!(via_class.tag(), crate::Tag::Array);
}

#[test]
fn nested_array_classes_inside_arguments() {
    let mut fx = Fixture::new();
    let string_array = fx.table.array_class(fx.string).expect("String[]");
    let matrix = fx.table.array_class(string_array).expect("String[][]");

    let via_class = canonicalize(&fx.table, &fx.list_of(RawType::Class(matrix))).expect("class");
    let via_generic = canonicalize(
        &fx.table,
        &fx.list_of(RawType::generic_array(RawType::generic_array(
            RawType::Class(fx.string),
        ))),
    )
    .expect("generic");

    assert_eq!(via_class, via_generic);
}

#[test]
fn canonicalize_is_idempotent() {
    let fx = Fixture::new();
    let shapes = [
        RawType::Class(fx.string),
        fx.list_of(RawType::wildcard_extends(RawType::Class(fx.number))),
        RawType::parameterized(
            fx.map,
            [
                RawType::Class(fx.string),
                RawType::generic_array(fx.list_of(RawType::wildcard())),
            ],
        ),
        RawType::member(
            RawType::Class(fx.outer),
            fx.inner,
            [RawType::wildcard_super(RawType::Class(fx.integer))],
        ),
        RawType::variable("T", Some(fx.comparable)),
    ];

    for shape in &shapes {
        let once = canonicalize(&fx.table, shape).expect("canonical");
        let twice = canonicalize(&fx.table, &RawType::Descriptor(once.clone())).expect("again");
        assert_eq!(once, twice, "{shape:?}");
    }
}

#[test]
fn wildcard_bound_lists_are_normalized() {
    let fx = Fixture::new();
    let reported = canonicalize(&fx.table, &RawType::wildcard()).expect("?");
    let bare = canonicalize(
        &fx.table,
        &RawType::Wildcard {
            upper: Vec::new(),
            lower: Vec::new(),
        },
    )
    .expect("?");

    assert_eq!(reported, TypeDescriptor::unbounded_wildcard());
    assert_eq!(bare, reported);
}

#[test]
fn wildcard_errors_propagate() {
    let fx = Fixture::new();
    let two_upper = RawType::Wildcard {
        upper: vec![RawType::Class(fx.number), RawType::Class(fx.comparable)],
        lower: Vec::new(),
    };
    assert_eq!(
        canonicalize(&fx.table, &two_upper),
        Err(ShapeError::MultipleUpperBounds(2).into())
    );

    let narrowed_super = RawType::Wildcard {
        upper: vec![RawType::Class(fx.number)],
        lower: vec![RawType::Class(fx.integer)],
    };
    assert_eq!(
        canonicalize(&fx.table, &narrowed_super),
        Err(ShapeError::LowerBoundWithUpper.into())
    );
}

#[test]
fn owner_rule_applies_to_nested_arguments() {
    let fx = Fixture::new();
    let ownerless = fx.list_of(RawType::parameterized(fx.inner, [RawType::Class(fx.string)]));
    assert_eq!(
        canonicalize(&fx.table, &ownerless),
        Err(ShapeError::MissingOwner {
            raw: "Outer$Inner".into()
        }
        .into())
    );

    let owned = fx.list_of(RawType::member(
        RawType::parameterized(fx.outer, [RawType::Class(fx.string)]),
        fx.inner,
        [RawType::Class(fx.string)],
    ));
    let desc = canonicalize(&fx.table, &owned).expect("owned");
    let inner = &desc.type_arguments()[0];
    assert!(inner.owner_type().is_some());
}

#[test]
fn primitive_argument_is_rejected() {
    let fx = Fixture::new();
    assert_eq!(
        canonicalize(&fx.table, &fx.list_of(RawType::Class(ClassId::INT))),
        Err(ShapeError::PrimitiveArgument("int".into()).into())
    );
}

#[test]
fn variables_pass_through() {
    let fx = Fixture::new();
    let desc = canonicalize(&fx.table, &RawType::variable("E", Some(fx.list))).expect("E");
    assert_eq!(
        desc,
        TypeDescriptor::variable(TypeVariable::new("E", Some(fx.list)))
    );
}

#[test]
fn unknown_class_is_reported() {
    let fx = Fixture::new();
    let bogus = ClassId::from_raw(4242);
    assert_eq!(
        canonicalize(&fx.table, &fx.list_of(RawType::Class(bogus))),
        Err(ReflectError::UnknownClass(bogus))
    );
}

#[test]
fn works_through_a_trait_object() {
    let fx = Fixture::new();
    let reflect: &dyn Reflect = &fx.table;
    let desc = canonicalize(reflect, &fx.list_of(RawType::Class(fx.string))).expect("dyn");
    assert_eq!(crate::render(reflect, &desc), "List<String>");
}
