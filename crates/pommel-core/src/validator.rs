//! Eligibility checks that gate generation.
//!
//! Every check runs, so one pass reports all problems of a construct. Only a
//! construct with no error diagnostics yields a [`BindingDescriptor`].

use crate::cache::MetadataCache;
use crate::descriptor::{BindingDescriptor, ProvidedParameter, RenderStrategy, SourceConstruct};
use crate::diagnostic::Diagnostic;
use crate::error::{PommelError, PommelResult};
use crate::resolver::{BindingInputs, resolve_binding};
use crate::scope::ScopeMapper;
use pommel_model::{
    Annotated, Annotation, ClassName, Construct, ContainerKind, FunctionConstruct, Parameter,
    PropertyAccessor, SoloModule, TypeConstruct, TypeName, Visibility,
};

/// Diagnostic messages
pub mod messages {
    pub const TYPE_NOT_PUBLIC: &str = "Types marked with @SoloModule must be public";
    pub const NESTED_TYPE_NOT_STATIC: &str = "Nested types marked with @SoloModule must be static";
    pub const MULTIPLE_INJECT_CONSTRUCTORS: &str =
        "Multiple constructors marked with @Inject annotated found.";
    pub const PRIVATE_INJECT_CONSTRUCTOR: &str = "@Inject constructor must not be private.";
    pub const FUNCTION_NOT_PUBLIC: &str = "Functions marked with @SoloModule must be public";
    pub const FUNCTION_NOT_STATIC: &str =
        "Functions marked with @SoloModule must be top level or enclosed in an object or companion class";
    pub const CUSTOM_SCOPE: &str =
        "@SoloModule does not support custom scopes--use recognized scope markers or disable installation";
}

/// Outcome of validating one construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted(BindingDescriptor),
    Rejected(Vec<Diagnostic>),
}

pub struct Validator<'a> {
    cache: &'a MetadataCache<'a>,
    scopes: &'a ScopeMapper,
}

impl<'a> Validator<'a> {
    pub fn new(cache: &'a MetadataCache<'a>, scopes: &'a ScopeMapper) -> Self {
        Self { cache, scopes }
    }

    /// Validate a construct.
    ///
    /// `Err` means the host broke its contract, for example a class with no
    /// `@Inject` constructor or a container with no metadata.
    pub fn validate(&self, construct: &Construct) -> PommelResult<Validation> {
        match construct {
            Construct::Type(ty) => self.validate_type(ty),
            Construct::Function(function) => self.validate_callable(Callable::function(function)),
            Construct::PropertyAccessor(accessor) => {
                self.validate_callable(Callable::accessor(accessor))
            }
        }
    }

    fn validate_type(&self, ty: &TypeConstruct) -> PommelResult<Validation> {
        let location = ty.name.canonical_name();
        let mut diagnostics = Vec::new();

        if !ty.visibility.is_public() {
            diagnostics.push(Diagnostic::error(&location, messages::TYPE_NOT_PUBLIC));
        }

        if ty.is_nested() && !ty.is_static {
            diagnostics.push(Diagnostic::error(&location, messages::NESTED_TYPE_NOT_STATIC));
        }

        let injectable = ty.injectable_constructors();
        let constructor = match injectable.as_slice() {
            [] => {
                return Err(PommelError::invariant(
                    location,
                    "no @Inject constructor on a construct handed to validation",
                ));
            }
            [single] => Some(*single),
            _ => {
                diagnostics.push(Diagnostic::error(
                    &location,
                    messages::MULTIPLE_INJECT_CONSTRUCTORS,
                ));
                None
            }
        };

        if let Some(constructor) = constructor
            && constructor.visibility.is_private()
        {
            diagnostics.push(Diagnostic::error(
                &location,
                messages::PRIVATE_INJECT_CONSTRUCTOR,
            ));
        }

        let resolved = match resolve_binding(&BindingInputs::for_type(ty)) {
            Ok(resolved) => Some(resolved),
            Err(conflicts) => {
                diagnostics.extend(
                    conflicts
                        .iter()
                        .map(|conflict| Diagnostic::error(&location, conflict.message())),
                );
                None
            }
        };

        let mapping = self
            .scopes
            .map(ty.scope_annotation(), ty.solo_module.install_in.as_ref());
        if ty.solo_module.install && mapping.install_target.is_none() {
            diagnostics.push(Diagnostic::error(&location, messages::CUSTOM_SCOPE));
        }

        let (Some(constructor), Some(resolved), true) =
            (constructor, resolved, diagnostics.is_empty())
        else {
            return Ok(Validation::Rejected(diagnostics));
        };

        let (strategy, parameters) = if resolved.self_binding {
            (
                RenderStrategy::Provides,
                provided_parameters(&constructor.parameters),
            )
        } else {
            (RenderStrategy::Binds, Vec::new())
        };

        let descriptor = BindingDescriptor::builder(
            SourceConstruct::Type {
                name: ty.name.clone(),
            },
            resolved.exposed_type,
            strategy,
        )
        .install_target(mapping.install_target)
        .scope(mapping.scope)
        .qualifier(ty.qualifier_annotation().cloned())
        .generation_enabled(ty.solo_module.install)
        .parameters(parameters)
        .build()?;

        Ok(Validation::Accepted(descriptor))
    }

    fn validate_callable(&self, callable: Callable<'_>) -> PommelResult<Validation> {
        let location = format!("{}.{}", callable.container.canonical_name(), callable.name);
        let kind = self.cache.container_kind(callable.container)?;
        let mut diagnostics = Vec::new();

        if !callable.visibility.is_public() {
            diagnostics.push(Diagnostic::error(&location, messages::FUNCTION_NOT_PUBLIC));
        }

        if !callable.is_static && !kind.is_singleton_like() {
            diagnostics.push(Diagnostic::error(&location, messages::FUNCTION_NOT_STATIC));
        }

        let solo_module = callable.solo_module;
        let mapping = self
            .scopes
            .map(callable.scope_annotation(), solo_module.install_in.as_ref());
        if solo_module.install && mapping.install_target.is_none() {
            diagnostics.push(Diagnostic::error(&location, messages::CUSTOM_SCOPE));
        }

        if !diagnostics.is_empty() {
            return Ok(Validation::Rejected(diagnostics));
        }

        let exposed_type = solo_module
            .binding_class
            .specified()
            .unwrap_or(callable.return_type)
            .clone();

        let descriptor = BindingDescriptor::builder(
            SourceConstruct::Function {
                container: callable.container.clone(),
                name: callable.name.clone(),
                receiver: call_receiver(callable.container, kind),
            },
            exposed_type,
            RenderStrategy::Provides,
        )
        .install_target(mapping.install_target)
        .scope(mapping.scope)
        .qualifier(callable.qualifier_annotation().cloned())
        .generation_enabled(solo_module.install)
        .parameters(provided_parameters(callable.parameters))
        .build()?;

        Ok(Validation::Accepted(descriptor))
    }
}

/// Expression a function is called on: the container chain, plus the
/// singleton instance when the nearest container is a named object.
fn call_receiver(container: &ClassName, kind: ContainerKind) -> String {
    let chain = container.simple_names().join(".");
    match kind {
        ContainerKind::Object => format!("{chain}.INSTANCE"),
        _ => chain,
    }
}

fn provided_parameters(parameters: &[Parameter]) -> Vec<ProvidedParameter> {
    parameters
        .iter()
        .map(|parameter| ProvidedParameter {
            name: parameter.name.clone(),
            ty: parameter.ty.clone(),
            qualifier: parameter.qualifier_annotation().cloned(),
        })
        .collect()
}

/// Functions and property getters validate the same way
struct Callable<'c> {
    container: &'c ClassName,
    name: String,
    visibility: Visibility,
    is_static: bool,
    parameters: &'c [Parameter],
    return_type: &'c TypeName,
    annotations: &'c [Annotation],
    solo_module: &'c SoloModule,
}

impl<'c> Callable<'c> {
    fn function(function: &'c FunctionConstruct) -> Self {
        Self {
            container: &function.container,
            name: function.name.clone(),
            visibility: function.visibility,
            is_static: function.is_static,
            parameters: &function.parameters,
            return_type: &function.return_type,
            annotations: &function.annotations,
            solo_module: &function.solo_module,
        }
    }

    fn accessor(accessor: &'c PropertyAccessor) -> Self {
        Self {
            container: &accessor.container,
            name: accessor.accessor_name(),
            visibility: accessor.visibility,
            is_static: accessor.is_static,
            parameters: &[],
            return_type: &accessor.return_type,
            annotations: &accessor.annotations,
            solo_module: &accessor.solo_module,
        }
    }
}

impl Annotated for Callable<'_> {
    fn annotations(&self) -> &[Annotation] {
        self.annotations
    }
}
