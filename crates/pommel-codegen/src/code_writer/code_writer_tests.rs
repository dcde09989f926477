#![allow(non_snake_case)]

use super::*;

fn class(name: &str) -> ClassName {
    ClassName::best_guess(name).unwrap()
}

fn ty(name: &str) -> TypeName {
    TypeName::parse(name).unwrap()
}

fn writer() -> CodeWriter {
    CodeWriter::new("test", Imports::new())
}

fn imports(classes: &[&str]) -> Imports {
    classes
        .iter()
        .map(|name| {
            let class = class(name);
            (class.simple_name().to_string(), class)
        })
        .collect()
}

// ============================================================================
// Indentation and statements
// ============================================================================

#[test]
fn CodeWriter___nested_lines___indented_lazily() {
    let mut out = writer();
    out.emit("class A {\n").indent(1).emit("int x;\n\nint y;\n").unindent(1).emit("}\n");

    assert_eq!(out.finish(), "class A {\n  int x;\n\n  int y;\n}\n");
}

#[test]
fn CodeWriter___statement_continuation___indents_two_levels() {
    let mut out = writer();
    out.emit("{\n").indent(1);
    out.emit_code(&CodeBlock::statement(CodeBlock::of("return f(\na,\nb)")));
    out.unindent(1).emit("}\n");

    assert_eq!(out.finish(), "{\n  return f(\n      a,\n      b);\n}\n");
}

#[test]
fn CodeWriter___single_line_statement___leaves_indent_alone() {
    let mut out = writer();
    out.emit("{\n").indent(1);
    out.emit_code(&CodeBlock::statement(CodeBlock::of("return x")));
    out.emit("next\n");

    assert_eq!(out.finish(), "{\n  return x;\n  next\n");
}

// ============================================================================
// Name resolution
// ============================================================================

#[test]
fn CodeWriter___same_package_class___written_by_simple_name() {
    let mut out = writer();
    out.emit_type(&ty("test.SampleClass"));

    assert_eq!(out.finish(), "SampleClass");
}

#[test]
fn CodeWriter___same_package_nested___keeps_enclosing_names() {
    let mut out = writer();
    out.emit_type(&ty("test.SampleClass$InnerClass"));

    assert_eq!(out.finish(), "SampleClass.InnerClass");
}

#[test]
fn CodeWriter___other_package_first_pass___qualified_and_importable() {
    let mut out = writer();
    out.emit_type(&ty("java.lang.String"));

    assert_eq!(out.suggested_imports(), imports(&["java.lang.String"]));
    assert_eq!(out.finish(), "java.lang.String");
}

#[test]
fn CodeWriter___imported_class___written_by_simple_name() {
    let mut out = CodeWriter::new("test", imports(&["java.lang.String"]));
    out.emit_type(&ty("java.lang.String"));

    assert_eq!(out.finish(), "String");
}

#[test]
fn CodeWriter___nested_class_of_import___uses_outer_name() {
    let mut out = CodeWriter::new("test", imports(&["java.util.Map"]));
    out.emit_type(&ty("java.util.Map$Entry"));

    assert_eq!(out.finish(), "Map.Entry");
}

#[test]
fn CodeWriter___conflicting_simple_names___first_one_wins() {
    let mut out = writer();
    out.emit_type(&ty("dagger.Module"));
    out.emit_type(&ty("other.Module"));

    assert_eq!(out.suggested_imports(), imports(&["dagger.Module"]));
}

#[test]
fn CodeWriter___import_shadowing_other_class___qualifies_it() {
    let mut out = CodeWriter::new("test", imports(&["dagger.Module"]));
    out.emit_type(&ty("other.Module"));

    assert_eq!(out.finish(), "other.Module");
}

#[test]
fn CodeWriter___same_package_name___blocks_import() {
    let mut out = writer();
    out.emit_type(&ty("dagger.Module"));
    out.emit_type(&ty("test.Module"));

    assert!(out.suggested_imports().is_empty());
}

#[test]
fn CodeWriter___current_type_name___blocks_foreign_class() {
    let mut out = CodeWriter::new("test", Imports::new());
    out.push_type("Widget");
    out.emit_type(&ty("other.Widget"));
    out.pop_type();

    assert_eq!(out.finish(), "other.Widget");
}

#[test]
fn CodeWriter___default_package_class___never_imported() {
    let mut out = CodeWriter::new("test", Imports::new());
    out.emit_type(&ty("Orphan"));

    assert!(out.suggested_imports().is_empty());
    assert_eq!(out.finish(), "Orphan");
}

#[test]
fn CodeWriter___generic_and_array_types___resolve_each_part() {
    let mut out = CodeWriter::new("test", imports(&["java.util.List", "java.lang.String"]));
    out.emit_type(&ty("java.util.List<java.lang.String>"));
    out.emit(" ");
    out.emit_type(&ty("int[]"));

    assert_eq!(out.finish(), "List<String> int[]");
}
