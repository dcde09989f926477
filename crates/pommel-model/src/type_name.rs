//! Type references as the host reports them.
//!
//! [`ClassName`] keeps the package and the chain of nested simple names apart,
//! which is what the renderer needs to name generated types and to decide
//! imports. [`TypeName`] adds primitives, arrays and parameterized types.
//!
//! Both parse from and display as the usual dotted text form:
//!
//! | Text | Parsed as |
//! |------|-----------|
//! | `int` | [`TypeName::Primitive`] |
//! | `java.lang.String` | [`TypeName::Class`] |
//! | `test.Outer$Inner` or `test.Outer.Inner` | nested [`ClassName`] |
//! | `java.util.List<java.lang.String>` | [`TypeName::Parameterized`] |
//! | `byte[]` | [`TypeName::Array`] |
//!
//! Package segments are told apart from class names by case: leading segments
//! starting with a lowercase letter form the package.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully-qualified, possibly nested, class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Create a class name from a package and the chain of simple names,
    /// outermost first.
    pub fn nested(package: impl Into<String>, simple_names: Vec<String>) -> ModelResult<Self> {
        let package = package.into();
        if simple_names.is_empty() || simple_names.iter().any(String::is_empty) {
            return Err(ModelError::invalid_type_name(
                &format!("{package}.{}", simple_names.join("$")),
                "class names must be non-empty",
            ));
        }
        Ok(Self {
            package,
            simple_names,
        })
    }

    /// Split dotted text into package and class names.
    pub fn best_guess(text: &str) -> ModelResult<Self> {
        let text = text.trim();
        let mut package = Vec::new();
        let mut simple_names = Vec::new();

        for segment in text.split('.') {
            if segment.is_empty() {
                return Err(ModelError::invalid_type_name(text, "empty name segment"));
            }
            if !is_identifier(segment) {
                return Err(ModelError::invalid_type_name(
                    text,
                    format!("'{segment}' is not a valid identifier"),
                ));
            }

            if simple_names.is_empty() && segment.starts_with(|c: char| c.is_lowercase()) {
                package.push(segment);
                continue;
            }

            for name in segment.split('$') {
                if name.is_empty() {
                    return Err(ModelError::invalid_type_name(text, "empty nested class name"));
                }
                simple_names.push(name.to_string());
            }
        }

        if simple_names.is_empty() {
            return Err(ModelError::invalid_type_name(
                text,
                "no class name found (class names start with an uppercase letter)",
            ));
        }

        Ok(Self {
            package: package.join("."),
            simple_names,
        })
    }

    /// The package, empty for the default package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// All simple names, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The directly enclosing class, if this class is nested.
    pub fn enclosing_class_name(&self) -> Option<ClassName> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// The outermost class of the nesting chain.
    pub fn top_level_class_name(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    /// A class nested directly inside this one.
    pub fn nested_class(&self, name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// A class beside this one: same package and enclosing class.
    pub fn peer_class(&self, name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.pop();
        simple_names.push(name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Source-level name: `a.b.Outer.Inner`.
    pub fn canonical_name(&self) -> String {
        self.qualified(&self.simple_names.join("."))
    }

    /// Binary name: `a.b.Outer$Inner`.
    pub fn reflection_name(&self) -> String {
        self.qualified(&self.simple_names.join("$"))
    }

    fn qualified(&self, names: &str) -> String {
        if self.package.is_empty() {
            names.to_string()
        } else {
            format!("{}.{}", self.package, names)
        }
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl FromStr for ClassName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::best_guess(s)
    }
}

impl TryFrom<String> for ClassName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::best_guess(&value)
    }
}

impl From<ClassName> for String {
    fn from(value: ClassName) -> Self {
        value.canonical_name()
    }
}

/// Primitive types, including `void` for function return types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl Primitive {
    /// The Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Primitive::Boolean),
            "byte" => Some(Primitive::Byte),
            "short" => Some(Primitive::Short),
            "int" => Some(Primitive::Int),
            "long" => Some(Primitive::Long),
            "char" => Some(Primitive::Char),
            "float" => Some(Primitive::Float),
            "double" => Some(Primitive::Double),
            "void" => Some(Primitive::Void),
            _ => None,
        }
    }
}

/// Any type a construct can declare.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeName {
    /// A primitive type.
    Primitive(Primitive),

    /// A plain class or interface.
    Class(ClassName),

    /// A generic class with type arguments.
    Parameterized {
        raw: ClassName,
        arguments: Vec<TypeName>,
    },

    /// An array of the component type.
    Array(Box<TypeName>),
}

impl TypeName {
    /// Parse the textual form of a type.
    pub fn parse(text: &str) -> ModelResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ModelError::invalid_type_name(text, "empty type"));
        }

        if let Some(component) = trimmed.strip_suffix("[]") {
            return Ok(TypeName::Array(Box::new(Self::parse(component)?)));
        }

        if let Some(primitive) = Primitive::from_keyword(trimmed) {
            return Ok(TypeName::Primitive(primitive));
        }

        let Some(open) = trimmed.find('<') else {
            return Ok(TypeName::Class(ClassName::best_guess(trimmed)?));
        };

        let Some(inner) = trimmed[open + 1..].strip_suffix('>') else {
            return Err(ModelError::invalid_type_name(
                trimmed,
                "unbalanced type arguments",
            ));
        };

        let raw = ClassName::best_guess(&trimmed[..open])?;
        let arguments = split_type_arguments(trimmed, inner)?
            .into_iter()
            .map(Self::parse)
            .collect::<ModelResult<Vec<_>>>()?;

        Ok(TypeName::Parameterized { raw, arguments })
    }

    /// The class behind this type, ignoring type arguments.
    pub fn raw_class_name(&self) -> Option<&ClassName> {
        match self {
            TypeName::Class(class) => Some(class),
            TypeName::Parameterized { raw, .. } => Some(raw),
            TypeName::Primitive(_) | TypeName::Array(_) => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeName::Primitive(_))
    }
}

/// Split `A, B<C, D>` at top-level commas.
fn split_type_arguments<'a>(whole: &str, inner: &'a str) -> ModelResult<Vec<&'a str>> {
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ModelError::invalid_type_name(whole, "unbalanced type arguments")
                })?;
            }
            ',' if depth == 0 => {
                arguments.push(&inner[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ModelError::invalid_type_name(
            whole,
            "unbalanced type arguments",
        ));
    }
    arguments.push(&inner[start..]);

    if arguments.iter().any(|a| a.trim().is_empty()) {
        return Err(ModelError::invalid_type_name(whole, "empty type argument"));
    }
    Ok(arguments)
}

impl From<ClassName> for TypeName {
    fn from(value: ClassName) -> Self {
        TypeName::Class(value)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Primitive(primitive) => f.write_str(primitive.keyword()),
            TypeName::Class(class) => write!(f, "{class}"),
            TypeName::Parameterized { raw, arguments } => {
                write!(f, "{raw}<")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            }
            TypeName::Array(component) => write!(f, "{component}[]"),
        }
    }
}

impl FromStr for TypeName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "type_name/type_name_tests.rs"]
mod type_name_tests;
