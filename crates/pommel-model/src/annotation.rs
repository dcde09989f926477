//! Annotation instances attached to constructs and parameters

use crate::type_name::ClassName;
use serde::{Deserialize, Serialize};

/// Fully-qualified names of the annotations the generator recognizes
pub mod names {
    pub const SCOPE: &str = "javax.inject.Scope";
    pub const QUALIFIER: &str = "javax.inject.Qualifier";
    pub const INJECT: &str = "javax.inject.Inject";
    pub const NAMED: &str = "javax.inject.Named";

    pub const SINGLETON: &str = "javax.inject.Singleton";
    pub const ACTIVITY_RETAINED_SCOPED: &str = "dagger.hilt.android.scopes.ActivityRetainedScoped";
    pub const ACTIVITY_SCOPED: &str = "dagger.hilt.android.scopes.ActivityScoped";
    pub const FRAGMENT_SCOPED: &str = "dagger.hilt.android.scopes.FragmentScoped";
    pub const SERVICE_SCOPED: &str = "dagger.hilt.android.scopes.ServiceScoped";
    pub const VIEW_SCOPED: &str = "dagger.hilt.android.scopes.ViewScoped";

    /// Scope markers recognized even when the host reports no meta-annotations
    pub const BUILTIN_SCOPES: [&str; 6] = [
        SINGLETON,
        ACTIVITY_RETAINED_SCOPED,
        ACTIVITY_SCOPED,
        FRAGMENT_SCOPED,
        SERVICE_SCOPED,
        VIEW_SCOPED,
    ];
}

/// One `name = value` pair of an annotation.
///
/// `value` is source code, written out verbatim: a string member is stored
/// with its quotes (`"\"sample\""`), a class member as `Foo.class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: String,
}

/// An annotation as declared on a construct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub type_name: ClassName,

    /// Members in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AnnotationMember>,

    /// Annotations present on the annotation type itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<ClassName>,
}

impl Annotation {
    /// Create a marker annotation with no members
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: Vec::new(),
            meta: Vec::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_meta(mut self, meta: ClassName) -> Self {
        self.meta.push(meta);
        self
    }

    /// Check whether this annotation has the given fully-qualified type
    pub fn is(&self, qualified_name: &str) -> bool {
        self.type_name.canonical_name() == qualified_name
    }

    /// Check whether the annotation type is itself annotated with `qualified_name`
    pub fn is_meta_annotated(&self, qualified_name: &str) -> bool {
        self.meta
            .iter()
            .any(|meta| meta.canonical_name() == qualified_name)
    }

    /// A scope marker is meta-annotated with `@Scope` or is one of the built-ins
    pub fn is_scope(&self) -> bool {
        self.is_meta_annotated(names::SCOPE)
            || names::BUILTIN_SCOPES.iter().any(|scope| self.is(scope))
    }

    /// A qualifier is meta-annotated with `@Qualifier` or is `@Named`
    pub fn is_qualifier(&self) -> bool {
        self.is_meta_annotated(names::QUALIFIER) || self.is(names::NAMED)
    }
}

/// Anything that carries annotations in host-declared order.
///
/// Lookups return the first match. When several annotations of the same
/// category are present, which one comes first is up to the host.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotations().iter().any(|a| a.is(qualified_name))
    }

    fn find_annotation<P>(&self, predicate: P) -> Option<&Annotation>
    where
        P: Fn(&Annotation) -> bool,
    {
        self.annotations().iter().find(|a| predicate(a))
    }

    fn scope_annotation(&self) -> Option<&Annotation> {
        self.find_annotation(Annotation::is_scope)
    }

    fn qualifier_annotation(&self) -> Option<&Annotation> {
        self.find_annotation(Annotation::is_qualifier)
    }
}
