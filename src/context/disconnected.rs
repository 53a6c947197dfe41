use super::{ContextError, ContextMode, ParseContext};
use crate::model::{ArtifactReference, ModuleCoordinate, ModuleDescriptor, STATUS_INTEGRATION};
use chrono::{DateTime, Utc};
use tracing::debug;

/// How synthesized descriptors get their publication timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampPolicy {
    /// Wall-clock time of each call
    #[default]
    PerCall,
    /// Fixed timestamp for every descriptor
    Frozen(DateTime<Utc>),
}

impl TimestampPolicy {
    /// Freeze the current wall-clock time
    pub fn frozen_now() -> Self {
        TimestampPolicy::Frozen(Utc::now())
    }

    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            TimestampPolicy::PerCall => Utc::now(),
            TimestampPolicy::Frozen(at) => *at,
        }
    }
}

/// Parse context that never resolves anything
///
/// Lets a descriptor be parsed and validated in isolation:
/// - parents are synthesized as empty descriptors
/// - no artifact exists
/// - there is no current module
pub struct DisconnectedParseContext {
    default_status: String,
    timestamps: TimestampPolicy,
}

impl DisconnectedParseContext {
    /// Create a context stamping `default_status` with per-call timestamps
    pub fn new(default_status: impl Into<String>) -> Self {
        Self::with_timestamps(default_status, TimestampPolicy::PerCall)
    }

    pub fn with_timestamps(
        default_status: impl Into<String>,
        timestamps: TimestampPolicy,
    ) -> Self {
        Self {
            default_status: default_status.into(),
            timestamps,
        }
    }

    pub fn timestamps(&self) -> TimestampPolicy {
        self.timestamps
    }
}

impl Default for DisconnectedParseContext {
    fn default() -> Self {
        Self::new(STATUS_INTEGRATION)
    }
}

impl ParseContext for DisconnectedParseContext {
    fn resolve_parent_descriptor(
        &self,
        coordinate: &ModuleCoordinate,
    ) -> Result<ModuleDescriptor, ContextError> {
        debug!(%coordinate, status = %self.default_status, "synthesizing parent descriptor");
        Ok(ModuleDescriptor::new(
            coordinate.clone(),
            self.default_status.clone(),
            self.timestamps.timestamp(),
        ))
    }

    fn artifact_exists(&self, artifact: &ArtifactReference) -> bool {
        debug!(%artifact, "no repository in disconnected mode, reporting absent");
        false
    }

    fn current_coordinate(&self) -> Result<ModuleCoordinate, ContextError> {
        Err(ContextError::Unsupported {
            operation: "current_coordinate",
            mode: ContextMode::Disconnected,
        })
    }

    fn default_status(&self) -> &str {
        &self.default_status
    }

    fn mode(&self) -> ContextMode {
        ContextMode::Disconnected
    }
}
