//! Integration tests for Type
//!
//! Tests name parsing, built-in tags, and assignment compatibility.

use typedini_foundation::Type;

#[test]
fn parse_builtin_names() {
    assert_eq!(Type::parse("bool"), Type::Bool);
    assert_eq!(Type::parse("int"), Type::Int);
    assert_eq!(Type::parse("float"), Type::Float);
    assert_eq!(Type::parse("str"), Type::Str);
    assert_eq!(Type::parse("str_set"), Type::StrSet);
    assert_eq!(Type::parse("str_list"), Type::StrList);
    assert_eq!(Type::parse("int_list"), Type::IntList);
}

#[test]
fn unknown_names_are_named_types() {
    let ty = Type::parse("color");
    assert_eq!(ty, Type::named("color"));
    assert!(!ty.is_builtin());
    assert_eq!(ty.to_string(), "named<color>");
}

#[test]
fn builtins_are_distinct() {
    for (i, a) in Type::BUILTIN.iter().enumerate() {
        for b in &Type::BUILTIN[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn float_accepts_int() {
    assert!(Type::Float.accepts(&Type::Int));
    assert!(!Type::Int.accepts(&Type::Float));
    assert!(!Type::named("x").accepts(&Type::named("x")));
}

#[test]
fn external_types_by_rust_type() {
    struct Marker;
    assert_eq!(Type::of::<Marker>(), Type::of::<Marker>());
    assert_ne!(Type::of::<Marker>(), Type::of::<String>());
}
