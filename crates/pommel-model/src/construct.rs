//! Annotated constructs discovered by the host.
//!
//! A [`Construct`] is one declaration carrying `@SoloModule`: a class, a
//! function, or a property getter. Constructs are read-only inputs; the core
//! never mutates them.

use crate::annotation::{Annotated, Annotation};
use crate::type_name::{ClassName, TypeName};
use serde::{Deserialize, Serialize};

/// Types that count as "no superclass"
pub const ROOT_TYPES: [&str; 2] = ["java.lang.Object", "kotlin.Any"];

/// Placeholder values the host uses for "binding class not given"
pub const BINDING_CLASS_SENTINELS: [&str; 3] = ["java.lang.Void", "java.lang.Object", "kotlin.Nothing"];

// ============================================================================
// Declaration details
// ============================================================================

/// Declared visibility of a construct or constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// A constructor or function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl Annotated for Parameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// A class constructor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether the constructor carries `@Inject`
    #[serde(default)]
    pub injectable: bool,

    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Constructor {
    /// An `@Inject` constructor with the given parameters
    pub fn injectable(parameters: Vec<Parameter>) -> Self {
        Self {
            visibility: Visibility::Public,
            injectable: true,
            parameters,
        }
    }
}

// ============================================================================
// Marker parameters
// ============================================================================

/// The `bindingClass` marker parameter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<TypeName>", into = "Option<TypeName>")]
pub enum BindingClass {
    /// Infer the binding type
    #[default]
    Unspecified,

    /// Bind exactly this type
    Specified(TypeName),
}

impl BindingClass {
    pub fn specified(&self) -> Option<&TypeName> {
        match self {
            BindingClass::Unspecified => None,
            BindingClass::Specified(ty) => Some(ty),
        }
    }
}

impl From<Option<TypeName>> for BindingClass {
    fn from(value: Option<TypeName>) -> Self {
        match value {
            Some(TypeName::Class(class))
                if BINDING_CLASS_SENTINELS.contains(&class.canonical_name().as_str()) =>
            {
                BindingClass::Unspecified
            }
            Some(ty) => BindingClass::Specified(ty),
            None => BindingClass::Unspecified,
        }
    }
}

impl From<BindingClass> for Option<TypeName> {
    fn from(value: BindingClass) -> Self {
        match value {
            BindingClass::Unspecified => None,
            BindingClass::Specified(ty) => Some(ty),
        }
    }
}

/// Parameters of the `@SoloModule` marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloModule {
    #[serde(default)]
    pub binding_class: BindingClass,

    /// Explicit install target, bypassing the scope table
    #[serde(default)]
    pub install_in: Option<ClassName>,

    /// Emit the `@InstallIn` declaration
    #[serde(default = "default_true")]
    pub install: bool,

    /// Infer the binding type from declared supertypes
    #[serde(default = "default_true")]
    pub bind_super_type: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SoloModule {
    fn default() -> Self {
        Self {
            binding_class: BindingClass::Unspecified,
            install_in: None,
            install: default_true(),
            bind_super_type: default_true(),
        }
    }
}

// ============================================================================
// Constructs
// ============================================================================

/// Declared supertypes of a class, with the root type filtered out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supertypes<'a> {
    pub superclass: Option<&'a TypeName>,
    pub interfaces: &'a [TypeName],
}

/// A class annotated with `@SoloModule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstruct {
    pub name: ClassName,

    #[serde(default)]
    pub visibility: Visibility,

    /// Nested classes only: declared without an outer-instance reference
    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub superclass: Option<TypeName>,

    #[serde(default)]
    pub interfaces: Vec<TypeName>,

    #[serde(default)]
    pub constructors: Vec<Constructor>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub solo_module: SoloModule,
}

impl TypeConstruct {
    /// A public top-level class with no constructors yet
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            is_static: false,
            superclass: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            annotations: Vec::new(),
            solo_module: SoloModule::default(),
        }
    }

    pub fn own_type(&self) -> TypeName {
        TypeName::Class(self.name.clone())
    }

    pub fn is_nested(&self) -> bool {
        self.name.enclosing_class_name().is_some()
    }

    pub fn declared_supertypes(&self) -> Supertypes<'_> {
        let superclass = self.superclass.as_ref().filter(|ty| {
            !ty.raw_class_name()
                .is_some_and(|class| ROOT_TYPES.contains(&class.canonical_name().as_str()))
        });
        Supertypes {
            superclass,
            interfaces: &self.interfaces,
        }
    }

    pub fn injectable_constructors(&self) -> Vec<&Constructor> {
        self.constructors.iter().filter(|c| c.injectable).collect()
    }
}

impl Annotated for TypeConstruct {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// A function annotated with `@SoloModule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionConstruct {
    /// The class, object, companion or file facade declaring the function
    pub container: ClassName,

    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub return_type: TypeName,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub solo_module: SoloModule,
}

impl Annotated for FunctionConstruct {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// A property whose getter is annotated with `@SoloModule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAccessor {
    pub container: ClassName,

    pub property: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub is_static: bool,

    pub return_type: TypeName,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub solo_module: SoloModule,
}

impl PropertyAccessor {
    /// JVM name of the getter: `baseUrl` becomes `getBaseUrl`, `isReady` stays.
    pub fn accessor_name(&self) -> String {
        let property = self.property.as_str();
        if let Some(rest) = property.strip_prefix("is")
            && rest.starts_with(|c: char| c.is_uppercase())
        {
            return property.to_string();
        }

        let mut chars = property.chars();
        match chars.next() {
            Some(first) => format!("get{}{}", first.to_uppercase(), chars.as_str()),
            None => "get".to_string(),
        }
    }
}

impl Annotated for PropertyAccessor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// One annotated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Construct {
    Type(TypeConstruct),
    Function(FunctionConstruct),
    PropertyAccessor(PropertyAccessor),
}

impl Construct {
    /// Location string used in diagnostics and logs
    pub fn display_name(&self) -> String {
        match self {
            Construct::Type(ty) => ty.name.canonical_name(),
            Construct::Function(function) => {
                format!("{}.{}", function.container.canonical_name(), function.name)
            }
            Construct::PropertyAccessor(accessor) => {
                format!(
                    "{}.{}",
                    accessor.container.canonical_name(),
                    accessor.accessor_name()
                )
            }
        }
    }

    pub fn solo_module(&self) -> &SoloModule {
        match self {
            Construct::Type(ty) => &ty.solo_module,
            Construct::Function(function) => &function.solo_module,
            Construct::PropertyAccessor(accessor) => &accessor.solo_module,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Construct::Type(ty) => ty.visibility,
            Construct::Function(function) => function.visibility,
            Construct::PropertyAccessor(accessor) => accessor.visibility,
        }
    }

    /// Package the generated artifact is written into
    pub fn package(&self) -> &str {
        match self {
            Construct::Type(ty) => ty.name.package(),
            Construct::Function(function) => function.container.package(),
            Construct::PropertyAccessor(accessor) => accessor.container.package(),
        }
    }
}

impl Annotated for Construct {
    fn annotations(&self) -> &[Annotation] {
        match self {
            Construct::Type(ty) => &ty.annotations,
            Construct::Function(function) => &function.annotations,
            Construct::PropertyAccessor(accessor) => &accessor.annotations,
        }
    }
}
