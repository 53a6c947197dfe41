use super::{ModuleResolver, ResolveError};
use crate::model::{ArtifactReference, ModuleCoordinate, ModuleDescriptor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// On-disk form of a repository index
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RepositoryIndex {
    #[serde(default)]
    pub descriptors: Vec<ModuleDescriptor>,
    #[serde(default)]
    pub artifacts: Vec<IndexedArtifact>,
}

/// A published file, keyed by its type and repository file name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedArtifact {
    pub module: ModuleCoordinate,
    #[serde(rename = "type")]
    pub kind: String,
    pub file: String,
}

impl RepositoryIndex {
    /// Read an index from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read repository index {}", path.display()))?;
        let index = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse repository index {}", path.display()))?;
        Ok(index)
    }
}

/// In-memory resolver over a fixed set of descriptors and artifacts
#[derive(Debug, Default)]
pub struct StaticResolver {
    descriptors: HashMap<ModuleCoordinate, ModuleDescriptor>,
    /// (module, artifact type, file name)
    artifacts: HashSet<(ModuleCoordinate, String, String)>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous one for the same coordinate
    pub fn insert_descriptor(&mut self, descriptor: ModuleDescriptor) {
        self.descriptors.insert(descriptor.coordinate.clone(), descriptor);
    }

    /// Register an artifact as published by `module`
    pub fn insert_artifact(&mut self, module: ModuleCoordinate, artifact: &ArtifactReference) {
        let key = (module, artifact.kind.clone(), artifact.file_name());
        self.artifacts.insert(key);
    }

    pub fn descriptor_count(&self) -> usize {
        self.descriptors.len()
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }
}

impl From<RepositoryIndex> for StaticResolver {
    fn from(index: RepositoryIndex) -> Self {
        let mut resolver = StaticResolver::new();
        for descriptor in index.descriptors {
            resolver.insert_descriptor(descriptor);
        }
        resolver.artifacts = index
            .artifacts
            .into_iter()
            .map(|entry| (entry.module, entry.kind, entry.file))
            .collect();
        resolver
    }
}

impl ModuleResolver for StaticResolver {
    fn resolve_descriptor(
        &self,
        coordinate: &ModuleCoordinate,
    ) -> Result<ModuleDescriptor, ResolveError> {
        self.descriptors
            .get(coordinate)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(coordinate.clone()))
    }

    fn artifact_exists(
        &self,
        module: &ModuleCoordinate,
        artifact: &ArtifactReference,
    ) -> Result<bool, ResolveError> {
        let key = (module.clone(), artifact.kind.clone(), artifact.file_name());
        Ok(self.artifacts.contains(&key))
    }
}
