mod connected;
mod disconnected;
mod error;


pub use connected::ConnectedParseContext;
pub use disconnected::{DisconnectedParseContext, TimestampPolicy};
pub use error::ContextError;

use crate::model::{ArtifactReference, ModuleCoordinate, ModuleDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which resolution policy answers the parser's queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Safe defaults, no lookups
    #[default]
    Disconnected,
    /// Backed by a live resolver
    Connected,
}

impl ContextMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContextMode::Disconnected => "disconnected",
            ContextMode::Connected => "connected",
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queries a descriptor parser may issue while walking a document
///
/// Every call is synchronous and must not mutate the context. Implementations
/// are chosen once by the caller; the parser only sees this trait.
pub trait ParseContext: Send + Sync {
    /// Produce the descriptor of a parent module to inherit fields from
    ///
    /// # Arguments
    /// * `coordinate` - Parent module named by an `extends` clause
    fn resolve_parent_descriptor(
        &self,
        coordinate: &ModuleCoordinate,
    ) -> Result<ModuleDescriptor, ContextError>;

    /// Whether the artifact is physically present. Never fails.
    fn artifact_exists(&self, artifact: &ArtifactReference) -> bool;

    /// Coordinate of the module presently being parsed
    fn current_coordinate(&self) -> Result<ModuleCoordinate, ContextError>;

    /// Status stamped onto descriptors this context produces
    fn default_status(&self) -> &str;

    fn mode(&self) -> ContextMode;
}
