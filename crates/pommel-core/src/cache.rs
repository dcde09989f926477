//! Memoized container metadata for one generation run

use dashmap::DashMap;
use pommel_model::{ClassName, ContainerKind, MetadataSource, ModelResult};

/// Caches [`MetadataSource::container_kind`] answers by reflection name.
///
/// One cache is created per run and passed to whoever needs it. Lookups may
/// race from several workers; the worst case is asking the source twice.
pub struct MetadataCache<'a> {
    source: &'a dyn MetadataSource,
    kinds: DashMap<String, ContainerKind>,
}

impl<'a> MetadataCache<'a> {
    pub fn new(source: &'a dyn MetadataSource) -> Self {
        Self {
            source,
            kinds: DashMap::new(),
        }
    }

    pub fn container_kind(&self, container: &ClassName) -> ModelResult<ContainerKind> {
        let key = container.reflection_name();
        if let Some(kind) = self.kinds.get(&key) {
            return Ok(*kind);
        }

        let kind = self.source.container_kind(container)?;
        self.kinds.insert(key, kind);
        Ok(kind)
    }

    /// Number of cached containers
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
