//! Host metadata queries

use crate::error::ModelResult;
use crate::type_name::ClassName;
use serde::{Deserialize, Serialize};

/// What kind of declaration a lexical container is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Class,
    Interface,
    /// A named singleton `object`
    Object,
    /// A companion object, named or not
    Companion,
    /// The synthetic class holding top-level functions of a file
    FileFacade,
}

impl ContainerKind {
    /// Objects and companions have a single instance
    pub fn is_singleton_like(self) -> bool {
        matches!(self, ContainerKind::Object | ContainerKind::Companion)
    }
}

/// Metadata the host exposes about enclosing declarations.
///
/// Implementations answer from whatever the host has at hand. A container
/// with no recorded metadata is a broken host contract and must return
/// [`ModelError::MissingMetadata`](crate::ModelError::MissingMetadata).
pub trait MetadataSource: Send + Sync {
    fn container_kind(&self, container: &ClassName) -> ModelResult<ContainerKind>;
}
