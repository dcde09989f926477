//! The resolved shape of one generated module

use crate::error::{PommelError, PommelResult};
use pommel_model::{Annotation, ClassName, TypeName};

/// What the generated entry point is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConstruct {
    /// A class constructed through its `@Inject` constructor
    Type { name: ClassName },

    /// A function or property getter called on its container
    Function {
        container: ClassName,
        /// JVM method name (`baseUrl`, `getBaseUrl`)
        name: String,
        /// Expression the call is made on (`Sample.A.INSTANCE`, `SourceKt`)
        receiver: String,
    },
}

impl SourceConstruct {
    pub fn package(&self) -> &str {
        match self {
            SourceConstruct::Type { name } => name.package(),
            SourceConstruct::Function { container, .. } => container.package(),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            SourceConstruct::Type { name } => name.canonical_name(),
            SourceConstruct::Function {
                container, name, ..
            } => format!("{}.{}", container.canonical_name(), name),
        }
    }
}

/// How the entry point is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// `@Provides` factory returning a new instance or a call result
    Provides,
    /// `@Binds` declaration narrowing the source type
    Binds,
}

/// A parameter forwarded to the constructor or function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedParameter {
    pub name: String,
    pub ty: TypeName,
    pub qualifier: Option<Annotation>,
}

/// A validated binding, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor {
    source: SourceConstruct,
    exposed_type: TypeName,
    strategy: RenderStrategy,
    install_target: Option<ClassName>,
    scope: Option<Annotation>,
    qualifier: Option<Annotation>,
    generation_enabled: bool,
    parameters: Vec<ProvidedParameter>,
}

impl BindingDescriptor {
    pub fn builder(
        source: SourceConstruct,
        exposed_type: TypeName,
        strategy: RenderStrategy,
    ) -> DescriptorBuilder {
        DescriptorBuilder {
            descriptor: BindingDescriptor {
                source,
                exposed_type,
                strategy,
                install_target: None,
                scope: None,
                qualifier: None,
                generation_enabled: true,
                parameters: Vec::new(),
            },
        }
    }

    pub fn source(&self) -> &SourceConstruct {
        &self.source
    }

    pub fn exposed_type(&self) -> &TypeName {
        &self.exposed_type
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn install_target(&self) -> Option<&ClassName> {
        self.install_target.as_ref()
    }

    pub fn scope(&self) -> Option<&Annotation> {
        self.scope.as_ref()
    }

    pub fn qualifier(&self) -> Option<&Annotation> {
        self.qualifier.as_ref()
    }

    /// Whether the `@InstallIn` declaration is emitted
    pub fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }

    pub fn parameters(&self) -> &[ProvidedParameter] {
        &self.parameters
    }
}

/// Builds a [`BindingDescriptor`], checking its invariants on [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    descriptor: BindingDescriptor,
}

impl DescriptorBuilder {
    pub fn install_target(mut self, target: Option<ClassName>) -> Self {
        self.descriptor.install_target = target;
        self
    }

    pub fn scope(mut self, scope: Option<Annotation>) -> Self {
        self.descriptor.scope = scope;
        self
    }

    pub fn qualifier(mut self, qualifier: Option<Annotation>) -> Self {
        self.descriptor.qualifier = qualifier;
        self
    }

    pub fn generation_enabled(mut self, enabled: bool) -> Self {
        self.descriptor.generation_enabled = enabled;
        self
    }

    pub fn parameters(mut self, parameters: Vec<ProvidedParameter>) -> Self {
        self.descriptor.parameters = parameters;
        self
    }

    pub fn build(self) -> PommelResult<BindingDescriptor> {
        let descriptor = self.descriptor;
        let location = descriptor.source.display_name();

        if descriptor.generation_enabled && descriptor.install_target.is_none() {
            return Err(PommelError::invariant(
                location,
                "installation is enabled but no install target was resolved",
            ));
        }

        if let SourceConstruct::Type { name } = &descriptor.source {
            let own_type = TypeName::Class(name.clone());
            match descriptor.strategy {
                RenderStrategy::Provides if descriptor.exposed_type != own_type => {
                    return Err(PommelError::invariant(
                        location,
                        format!(
                            "provides-style binding must expose {own_type}, not {}",
                            descriptor.exposed_type
                        ),
                    ));
                }
                RenderStrategy::Binds if descriptor.exposed_type == own_type => {
                    return Err(PommelError::invariant(
                        location,
                        "binds-style binding cannot expose its own type",
                    ));
                }
                _ => {}
            }

            if descriptor.strategy == RenderStrategy::Binds && !descriptor.parameters.is_empty() {
                return Err(PommelError::invariant(
                    location,
                    "binds-style binding takes no constructor parameters",
                ));
            }
        }

        Ok(descriptor)
    }
}
