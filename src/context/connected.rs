use super::{ContextError, ContextMode, ParseContext};
use crate::model::{ArtifactReference, ModuleCoordinate, ModuleDescriptor};
use crate::resolver::ModuleResolver;
use tracing::{debug, warn};

/// Parse context answering from a live resolver
pub struct ConnectedParseContext<R> {
    resolver: R,
    /// Module of the active resolution session
    current: ModuleCoordinate,
    default_status: String,
}

impl<R: ModuleResolver> ConnectedParseContext<R> {
    pub fn new(
        resolver: R,
        current: ModuleCoordinate,
        default_status: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            current,
            default_status: default_status.into(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: ModuleResolver> ParseContext for ConnectedParseContext<R> {
    fn resolve_parent_descriptor(
        &self,
        coordinate: &ModuleCoordinate,
    ) -> Result<ModuleDescriptor, ContextError> {
        debug!(%coordinate, "resolving parent descriptor");
        self.resolver
            .resolve_descriptor(coordinate)
            .map_err(|e| ContextError::Parse {
                coordinate: coordinate.to_string(),
                reason: e.to_string(),
            })
    }

    fn artifact_exists(&self, artifact: &ArtifactReference) -> bool {
        match self.resolver.artifact_exists(&self.current, artifact) {
            Ok(exists) => exists,
            Err(e) => {
                warn!(
                    module = %self.current,
                    %artifact,
                    error = %e,
                    "artifact check failed, treating as absent"
                );
                false
            }
        }
    }

    fn current_coordinate(&self) -> Result<ModuleCoordinate, ContextError> {
        Ok(self.current.clone())
    }

    fn default_status(&self) -> &str {
        &self.default_status
    }

    fn mode(&self) -> ContextMode {
        ContextMode::Connected
    }
}
