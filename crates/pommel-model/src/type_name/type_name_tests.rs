#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ClassName::best_guess tests

#[test_case("test.SampleClass", "test", &["SampleClass"])]
#[test_case("test.Outer$Inner", "test", &["Outer", "Inner"])]
#[test_case("test.Outer.Inner", "test", &["Outer", "Inner"])]
#[test_case("com.example.deep.Outer.Middle$Inner", "com.example.deep", &["Outer", "Middle", "Inner"])]
#[test_case("Sample", "", &["Sample"])]
fn ClassName___best_guess___splits_package_and_names(
    text: &str,
    package: &str,
    simple_names: &[&str],
) {
    let class = ClassName::best_guess(text).unwrap();

    assert_eq!(class.package(), package);
    assert_eq!(class.simple_names(), simple_names);
}

#[test_case("")]
#[test_case("test.")]
#[test_case("test..Sample")]
#[test_case("java.lang")]
#[test_case("test.Outer$")]
#[test_case("test.9Lives")]
fn ClassName___best_guess_invalid___returns_error(text: &str) {
    let result = ClassName::best_guess(text);

    assert!(matches!(result, Err(ModelError::InvalidTypeName { .. })));
}

#[test]
fn ClassName___nested___names_render_canonical_and_reflection_forms() {
    let class = ClassName::best_guess("test.Outer$Inner$Target").unwrap();

    assert_eq!(class.canonical_name(), "test.Outer.Inner.Target");
    assert_eq!(class.reflection_name(), "test.Outer$Inner$Target");
    assert_eq!(class.simple_name(), "Target");
}

#[test]
fn ClassName___default_package___omits_leading_dot() {
    let class = ClassName::new("", "Sample").nested_class("Inner");

    assert_eq!(class.canonical_name(), "Sample.Inner");
    assert_eq!(class.reflection_name(), "Sample$Inner");
}

#[test]
fn ClassName___enclosing_class_name___walks_outward() {
    let class = ClassName::best_guess("test.A.B.C").unwrap();

    let enclosing = class.enclosing_class_name().unwrap();

    assert_eq!(enclosing.canonical_name(), "test.A.B");
    assert_eq!(class.top_level_class_name().canonical_name(), "test.A");
    assert!(class.top_level_class_name().enclosing_class_name().is_none());
}

#[test]
fn ClassName___peer_class___replaces_innermost_name() {
    let class = ClassName::best_guess("test.Outer$Inner").unwrap();

    let peer = class.peer_class("Sibling");

    assert_eq!(peer.reflection_name(), "test.Outer$Sibling");
}

#[test]
fn ClassName___nested_with_empty_name___returns_error() {
    let result = ClassName::nested("test", vec!["Outer".into(), String::new()]);

    assert!(result.is_err());
}

#[test]
fn ClassName___serde___uses_canonical_string() {
    let class = ClassName::best_guess("test.Outer$Inner").unwrap();

    let json = serde_json::to_string(&class).unwrap();
    let back: ClassName = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "\"test.Outer.Inner\"");
    assert_eq!(back, class);
}

// TypeName::parse tests

#[test_case("int", TypeName::Primitive(Primitive::Int))]
#[test_case("boolean", TypeName::Primitive(Primitive::Boolean))]
#[test_case("void", TypeName::Primitive(Primitive::Void))]
fn TypeName___parse_primitive___returns_primitive(text: &str, expected: TypeName) {
    assert_eq!(TypeName::parse(text).unwrap(), expected);
}

#[test]
fn TypeName___parse_parameterized___keeps_nested_arguments() {
    let ty = TypeName::parse("java.util.Map<java.lang.String, java.util.List<test.Item>>").unwrap();

    let TypeName::Parameterized { raw, arguments } = &ty else {
        panic!("expected parameterized type, got {ty:?}");
    };
    assert_eq!(raw.canonical_name(), "java.util.Map");
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[1].to_string(), "java.util.List<test.Item>");
}

#[test]
fn TypeName___parse_array___wraps_component() {
    let ty = TypeName::parse("byte[]").unwrap();

    assert_eq!(ty, TypeName::Array(Box::new(TypeName::Primitive(Primitive::Byte))));
}

#[test_case("java.util.List<")]
#[test_case("java.util.List<>")]
#[test_case("java.util.Map<A,>")]
#[test_case("java.util.List<a.B>>")]
#[test_case("  ")]
fn TypeName___parse_malformed___returns_error(text: &str) {
    assert!(TypeName::parse(text).is_err());
}

#[test_case("java.lang.String")]
#[test_case("java.util.List<java.lang.String>")]
#[test_case("test.Outer.Inner[]")]
#[test_case("double")]
fn TypeName___display___matches_canonical_input(text: &str) {
    let ty = TypeName::parse(text).unwrap();

    assert_eq!(ty.to_string(), text);
}

#[test]
fn TypeName___raw_class_name___ignores_arguments() {
    let ty = TypeName::parse("java.util.List<java.lang.String>").unwrap();

    assert_eq!(ty.raw_class_name().unwrap().canonical_name(), "java.util.List");
    assert!(TypeName::parse("int").unwrap().raw_class_name().is_none());
}
