//! JSON manifest of discovered constructs.
//!
//! The host adapter writes one manifest per compilation: the container
//! metadata it knows about and every construct carrying `@SoloModule`.
//!
//! ```json
//! {
//!   "containers": { "test.Sample$Companion": "companion" },
//!   "constructs": [
//!     { "kind": "type", "name": "test.SampleClass", "constructors": [{ "injectable": true }] }
//!   ]
//! }
//! ```

use crate::construct::Construct;
use crate::error::{ModelError, ModelResult};
use crate::source::{ContainerKind, MetadataSource};
use crate::type_name::ClassName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Constructs and container metadata for one compilation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Container kinds keyed by reflection name (`test.Sample$Companion`)
    #[serde(default)]
    pub containers: BTreeMap<String, ContainerKind>,

    #[serde(default)]
    pub constructs: Vec<Construct>,
}

impl Manifest {
    /// Load a manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a manifest from JSON text
    pub fn from_json(content: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Record the kind of a container
    pub fn with_container(mut self, container: &ClassName, kind: ContainerKind) -> Self {
        self.containers.insert(container.reflection_name(), kind);
        self
    }

    pub fn with_construct(mut self, construct: Construct) -> Self {
        self.constructs.push(construct);
        self
    }
}

impl MetadataSource for Manifest {
    fn container_kind(&self, container: &ClassName) -> ModelResult<ContainerKind> {
        self.containers
            .get(&container.reflection_name())
            .or_else(|| self.containers.get(&container.canonical_name()))
            .copied()
            .ok_or_else(|| ModelError::MissingMetadata(container.reflection_name()))
    }
}
