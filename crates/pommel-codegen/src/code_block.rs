//! Fragments of Java source with type references left unresolved

use pommel_model::{ClassName, TypeName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CodePart {
    Literal(String),
    /// Written by its shortest unambiguous name once imports are known
    Type(TypeName),
    WrappingSpace,
    /// Lines after the first are indented two extra levels until the end
    StatementStart,
    StatementEnd,
}

/// A piece of code built from literals and type references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    parts: Vec<CodePart>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push(CodePart::Literal(text));
        }
        self
    }

    pub fn ty(mut self, ty: &TypeName) -> Self {
        self.parts.push(CodePart::Type(ty.clone()));
        self
    }

    pub fn class(self, class: &ClassName) -> Self {
        self.ty(&TypeName::Class(class.clone()))
    }

    /// A Java string literal
    pub fn string(self, value: &str) -> Self {
        self.text(string_literal(value))
    }

    pub fn block(mut self, other: CodeBlock) -> Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn wrapping_space(mut self) -> Self {
        self.parts.push(CodePart::WrappingSpace);
        self
    }

    /// `block;` as a statement, continuation lines indented
    pub fn statement(block: CodeBlock) -> Self {
        let mut parts = vec![CodePart::StatementStart];
        parts.extend(block.parts);
        parts.push(CodePart::Literal(";\n".to_string()));
        parts.push(CodePart::StatementEnd);
        Self { parts }
    }

    /// Concatenate blocks with `separator` between them
    pub fn join(blocks: impl IntoIterator<Item = CodeBlock>, separator: &str) -> Self {
        blocks
            .into_iter()
            .enumerate()
            .fold(Self::new(), |joined, (i, block)| {
                let joined = if i > 0 { joined.text(separator) } else { joined };
                joined.block(block)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn parts(&self) -> &[CodePart] {
        &self.parts
    }
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
