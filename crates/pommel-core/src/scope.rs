//! Scope to install-target mapping

use pommel_model::{Annotation, ClassName, names};
use std::fmt;

const HILT_COMPONENTS: &str = "dagger.hilt.android.components";

/// The recognized Hilt scope markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScope {
    Singleton,
    ActivityRetained,
    Activity,
    Fragment,
    Service,
    View,
}

impl BuiltinScope {
    pub const ALL: [BuiltinScope; 6] = [
        BuiltinScope::Singleton,
        BuiltinScope::ActivityRetained,
        BuiltinScope::Activity,
        BuiltinScope::Fragment,
        BuiltinScope::Service,
        BuiltinScope::View,
    ];

    /// Fully-qualified name of the scope annotation
    pub fn annotation(self) -> &'static str {
        match self {
            BuiltinScope::Singleton => names::SINGLETON,
            BuiltinScope::ActivityRetained => names::ACTIVITY_RETAINED_SCOPED,
            BuiltinScope::Activity => names::ACTIVITY_SCOPED,
            BuiltinScope::Fragment => names::FRAGMENT_SCOPED,
            BuiltinScope::Service => names::SERVICE_SCOPED,
            BuiltinScope::View => names::VIEW_SCOPED,
        }
    }

    pub fn from_annotation(annotation: &Annotation) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scope| annotation.is(scope.annotation()))
    }

    /// Component the scope installs into
    pub fn install_target(self, application_component: &ClassName) -> ClassName {
        let component = match self {
            BuiltinScope::Singleton => return application_component.clone(),
            BuiltinScope::ActivityRetained => "ActivityRetainedComponent",
            BuiltinScope::Activity => "ActivityComponent",
            BuiltinScope::Fragment => "FragmentComponent",
            BuiltinScope::Service => "ServiceComponent",
            BuiltinScope::View => "ViewComponent",
        };
        ClassName::new(HILT_COMPONENTS, component)
    }
}

impl fmt::Display for BuiltinScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation())
    }
}

/// Result of mapping a construct's scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMapping {
    /// `None` for a custom scope without an explicit `installIn`
    pub install_target: Option<ClassName>,
    /// Scope annotation to repeat on the entry point
    pub scope: Option<Annotation>,
}

/// Maps scope annotations to install targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMapper {
    application_component: ClassName,
}

impl ScopeMapper {
    pub fn new(application_component: ClassName) -> Self {
        Self {
            application_component,
        }
    }

    pub fn application_component(&self) -> &ClassName {
        &self.application_component
    }

    /// Map the found scope, letting an explicit `installIn` win
    pub fn map(&self, scope: Option<&Annotation>, install_in: Option<&ClassName>) -> ScopeMapping {
        let install_target = match (install_in, scope) {
            (Some(explicit), _) => Some(explicit.clone()),
            (None, None) => Some(self.application_component.clone()),
            (None, Some(scope)) => BuiltinScope::from_annotation(scope)
                .map(|builtin| builtin.install_target(&self.application_component)),
        };

        ScopeMapping {
            install_target,
            scope: scope.cloned(),
        }
    }

    /// The recognized scope table, in declaration order
    pub fn table(&self) -> Vec<(BuiltinScope, ClassName)> {
        BuiltinScope::ALL
            .into_iter()
            .map(|scope| (scope, scope.install_target(&self.application_component)))
            .collect()
    }
}

impl Default for ScopeMapper {
    fn default() -> Self {
        Self::new(ClassName::new("dagger.hilt.components", "SingletonComponent"))
    }
}
