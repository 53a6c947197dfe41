mod index;


pub use index::{IndexedArtifact, RepositoryIndex, StaticResolver};

use crate::model::{ArtifactReference, ModuleCoordinate, ModuleDescriptor};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Module not found: {0}")]
    NotFound(ModuleCoordinate),

    #[error("Resolver unavailable: {0}")]
    Unavailable(String),
}

/// Resolution engine consumed by a connected parse context
pub trait ModuleResolver: Send + Sync {
    /// Look up a previously resolved descriptor
    fn resolve_descriptor(
        &self,
        coordinate: &ModuleCoordinate,
    ) -> Result<ModuleDescriptor, ResolveError>;

    /// Check whether `module` publishes `artifact`
    fn artifact_exists(
        &self,
        module: &ModuleCoordinate,
        artifact: &ArtifactReference,
    ) -> Result<bool, ResolveError>;
}
