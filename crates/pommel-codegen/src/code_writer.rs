//! Indentation, statement continuation and name resolution for one file.
//!
//! A file is written twice. The first pass only records which classes could
//! be imported; the second pass writes the real output with those imports in
//! effect. [`CodeWriter::suggested_imports`] hands the result of the first
//! pass to the second.

use crate::code_block::{CodeBlock, CodePart};
use crate::line_wrapper::{COLUMN_LIMIT, LineWrapper};
use pommel_model::{ClassName, TypeName};
use std::collections::{BTreeMap, HashSet};

/// One level of indentation
pub const INDENT: &str = "  ";

/// Imports keyed by the simple name they make available
pub(crate) type Imports = BTreeMap<String, ClassName>;

pub(crate) struct CodeWriter {
    out: LineWrapper,
    package: String,
    indent_level: usize,
    /// `None` outside a statement, else the number of lines written in it
    statement_line: Option<usize>,
    trailing_newline: bool,
    /// Simple name of the type being written
    current_type: Option<String>,
    imported: Imports,
    importable: Imports,
    referenced: HashSet<String>,
}

impl CodeWriter {
    pub(crate) fn new(package: &str, imported: Imports) -> Self {
        Self {
            out: LineWrapper::new(INDENT, COLUMN_LIMIT),
            package: package.to_string(),
            indent_level: 0,
            statement_line: None,
            trailing_newline: false,
            current_type: None,
            imported,
            importable: Imports::new(),
            referenced: HashSet::new(),
        }
    }

    pub(crate) fn imported(&self) -> &Imports {
        &self.imported
    }

    /// Importable classes seen so far, minus simple names that already mean
    /// a class of the generated package
    pub(crate) fn suggested_imports(&self) -> Imports {
        self.importable
            .iter()
            .filter(|(simple_name, _)| !self.referenced.contains(*simple_name))
            .map(|(simple_name, class)| (simple_name.clone(), class.clone()))
            .collect()
    }

    pub(crate) fn push_type(&mut self, simple_name: &str) {
        self.current_type = Some(simple_name.to_string());
    }

    pub(crate) fn pop_type(&mut self) {
        self.current_type = None;
    }

    pub(crate) fn indent(&mut self, levels: usize) -> &mut Self {
        self.indent_level += levels;
        self
    }

    pub(crate) fn unindent(&mut self, levels: usize) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(levels);
        self
    }

    pub(crate) fn wrapping_space(&mut self) -> &mut Self {
        self.out.wrapping_space(self.indent_level + 2);
        self
    }

    /// Write literal text, indenting each new non-empty line
    pub(crate) fn emit(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.append("\n");
                self.trailing_newline = true;
                if let Some(line_count) = self.statement_line.as_mut() {
                    if *line_count == 0 {
                        self.indent_level += 2;
                    }
                    *line_count += 1;
                }
            }

            if line.is_empty() {
                continue;
            }
            if self.trailing_newline {
                for _ in 0..self.indent_level {
                    self.out.append(INDENT);
                }
            }
            self.out.append(line);
            self.trailing_newline = false;
        }
        self
    }

    pub(crate) fn emit_code(&mut self, code: &CodeBlock) -> &mut Self {
        for part in code.parts() {
            match part {
                CodePart::Literal(text) => {
                    self.emit(text);
                }
                CodePart::Type(ty) => {
                    self.emit_type(ty);
                }
                CodePart::WrappingSpace => {
                    self.wrapping_space();
                }
                CodePart::StatementStart => self.statement_line = Some(0),
                CodePart::StatementEnd => {
                    if self.statement_line.is_some_and(|lines| lines > 0) {
                        self.unindent(2);
                    }
                    self.statement_line = None;
                }
            }
        }
        self
    }

    pub(crate) fn emit_type(&mut self, ty: &TypeName) -> &mut Self {
        match ty {
            TypeName::Primitive(primitive) => self.emit(primitive.keyword()),
            TypeName::Class(class) => self.emit_class(class),
            TypeName::Parameterized { raw, arguments } => {
                self.emit_class(raw).emit("<");
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.emit_type(argument);
                }
                self.emit(">")
            }
            TypeName::Array(component) => self.emit_type(component).emit("[]"),
        }
    }

    pub(crate) fn emit_class(&mut self, class: &ClassName) -> &mut Self {
        let name = self.lookup_name(class);
        self.emit(&name)
    }

    pub(crate) fn finish(self) -> String {
        self.out.finish()
    }

    /// Shortest name that still refers to `class` from inside the file
    fn lookup_name(&mut self, class: &ClassName) -> String {
        let mut name_resolved = false;
        let mut candidate = Some(class.clone());

        while let Some(current) = candidate {
            let resolved = self.resolve(current.simple_name());
            name_resolved = resolved.is_some();
            if let Some(resolved) = resolved
                && resolved.canonical_name() == current.canonical_name()
            {
                let offset = current.simple_names().len() - 1;
                return class.simple_names()[offset..].join(".");
            }
            candidate = current.enclosing_class_name();
        }

        // The simple name means something else here
        if name_resolved {
            return class.canonical_name();
        }

        if class.package() == self.package {
            self.referenced
                .insert(class.top_level_class_name().simple_name().to_string());
            return class.simple_names().join(".");
        }

        self.mark_importable(class);
        class.canonical_name()
    }

    fn resolve(&self, simple_name: &str) -> Option<ClassName> {
        if self.current_type.as_deref() == Some(simple_name) {
            return Some(ClassName::new(self.package.clone(), simple_name));
        }
        self.imported.get(simple_name).cloned()
    }

    fn mark_importable(&mut self, class: &ClassName) {
        if class.package().is_empty() {
            return;
        }
        let top_level = class.top_level_class_name();
        // First class seen for a simple name keeps it
        self.importable
            .entry(top_level.simple_name().to_string())
            .or_insert(top_level);
    }
}

#[cfg(test)]
#[path = "code_writer/code_writer_tests.rs"]
mod code_writer_tests;
