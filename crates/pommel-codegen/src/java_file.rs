//! Declarations of a generated Java file and their layout

use crate::code_block::CodeBlock;
use crate::code_writer::{CodeWriter, Imports};
use pommel_model::{Annotation, ClassName, TypeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Abstract,
    Static,
}

impl Modifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
        }
    }
}

fn emit_modifiers(writer: &mut CodeWriter, modifiers: &[Modifier]) {
    let mut sorted = modifiers.to_vec();
    sorted.sort();
    sorted.dedup();
    for modifier in sorted {
        writer.emit(modifier.keyword()).emit(" ");
    }
}

/// An annotation use site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDecl {
    type_name: ClassName,
    members: Vec<(String, CodeBlock)>,
}

impl AnnotationDecl {
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: CodeBlock) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// Copy a host annotation, member values kept as written
    pub fn copy_of(annotation: &Annotation) -> Self {
        annotation
            .members
            .iter()
            .fold(Self::new(annotation.type_name.clone()), |decl, member| {
                decl.member(member.name.clone(), CodeBlock::of(member.value.clone()))
            })
    }

    fn emit(&self, writer: &mut CodeWriter, inline: bool) {
        let (whitespace, separator) = if inline { ("", ", ") } else { ("\n", ",\n") };

        writer.emit("@").emit_class(&self.type_name);
        match self.members.as_slice() {
            [] => {}
            [(name, value)] if name == "value" => {
                writer.emit("(").emit_code(value).emit(")");
            }
            members => {
                writer.emit("(").emit(whitespace).indent(2);
                for (i, (name, value)) in members.iter().enumerate() {
                    if i > 0 {
                        writer.emit(separator);
                    }
                    writer.emit(name).emit(" = ").emit_code(value);
                }
                writer.unindent(2).emit(whitespace).emit(")");
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    pub annotations: Vec<AnnotationDecl>,
    pub ty: TypeName,
    pub name: String,
}

impl ParameterDecl {
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            ty,
            name: name.into(),
        }
    }

    fn emit(&self, writer: &mut CodeWriter) {
        for annotation in &self.annotations {
            annotation.emit(writer, true);
            writer.emit(" ");
        }
        writer.emit_type(&self.ty).emit(" ").emit(&self.name);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub annotations: Vec<AnnotationDecl>,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeName,
    pub parameters: Vec<ParameterDecl>,
    /// Ignored for abstract methods
    pub body: CodeBlock,
}

impl MethodDecl {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&Modifier::Abstract)
    }

    fn emit(&self, writer: &mut CodeWriter) {
        for annotation in &self.annotations {
            annotation.emit(writer, false);
            writer.emit("\n");
        }
        emit_modifiers(writer, &self.modifiers);
        writer
            .emit_type(&self.return_type)
            .emit(" ")
            .emit(&self.name)
            .emit("(");

        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                writer.emit(",").wrapping_space();
            }
            parameter.emit(writer);
        }
        writer.emit(")");

        if self.is_abstract() {
            writer.emit(";\n");
        } else {
            writer.emit(" {\n").indent(1).emit_code(&self.body).unindent(1).emit("}\n");
        }
    }
}

/// A top-level class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub annotations: Vec<AnnotationDecl>,
    pub modifiers: Vec<Modifier>,
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    fn emit(&self, writer: &mut CodeWriter) {
        for annotation in &self.annotations {
            annotation.emit(writer, false);
            writer.emit("\n");
        }
        emit_modifiers(writer, &self.modifiers);
        writer.emit("class ").emit(&self.name).emit(" {\n");

        writer.push_type(&self.name);
        writer.indent(1);
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                writer.emit("\n");
            }
            method.emit(writer);
        }
        writer.unindent(1);
        writer.pop_type();

        writer.emit("}\n");
    }
}

/// One compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile {
    pub package: String,
    pub type_decl: TypeDecl,
}

impl JavaFile {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.type_decl.name)
    }

    /// Render the file: a collecting pass for imports, then the real one
    pub fn to_source(&self) -> String {
        let mut collector = CodeWriter::new(&self.package, Imports::new());
        self.emit(&mut collector);

        let mut writer = CodeWriter::new(&self.package, collector.suggested_imports());
        self.emit(&mut writer);
        writer.finish()
    }

    fn emit(&self, writer: &mut CodeWriter) {
        if !self.package.is_empty() {
            writer.emit("package ").emit(&self.package).emit(";\n").emit("\n");
        }

        let mut imports: Vec<String> = writer
            .imported()
            .values()
            .map(ClassName::canonical_name)
            .collect();
        imports.sort();
        for import in &imports {
            writer.emit("import ").emit(import).emit(";\n");
        }
        if !imports.is_empty() {
            writer.emit("\n");
        }

        self.type_decl.emit(writer);
    }
}
