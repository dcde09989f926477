//! pommel-model - Host model consumed by the pommel module generator
//!
//! The host (an annotation processor, a compiler plugin, or a manifest written
//! by either) describes what it discovered with these types:
//! - [`ClassName`] and [`TypeName`] for type references
//! - [`Annotation`] and the [`Annotated`] query trait
//! - [`Construct`], the annotated class, function or property getter
//! - [`MetadataSource`] for lookups about enclosing containers
//! - [`Manifest`], the JSON interchange form of all of the above

mod annotation;
mod construct;
mod error;
mod manifest;
mod source;
mod type_name;

pub use annotation::{Annotated, Annotation, AnnotationMember, names};
pub use construct::{
    BINDING_CLASS_SENTINELS, BindingClass, Construct, Constructor, FunctionConstruct, Parameter,
    PropertyAccessor, ROOT_TYPES, SoloModule, Supertypes, TypeConstruct, Visibility,
};
pub use error::{ModelError, ModelResult};
pub use manifest::Manifest;
pub use source::{ContainerKind, MetadataSource};
pub use type_name::{ClassName, Primitive, TypeName};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotated, Annotation, BindingClass, ClassName, Construct, ContainerKind, Manifest,
        MetadataSource, ModelError, ModelResult, SoloModule, TypeName,
    };
}
