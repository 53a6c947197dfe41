// Public API exports
pub mod config;
pub mod context;
pub mod extends;
pub mod model;
pub mod resolver;

// Re-export main types for convenience
pub use context::{
    ConnectedParseContext, ContextError, ContextMode, DisconnectedParseContext, ParseContext,
    TimestampPolicy,
};

pub use model::{
    ArtifactReference, CoordinateParseError, ModuleCoordinate, ModuleDescriptor,
    STATUS_INTEGRATION, STATUS_MILESTONE, STATUS_RELEASE,
};

pub use resolver::{ModuleResolver, RepositoryIndex, ResolveError, StaticResolver};

pub use extends::{ExtendsDirective, InheritScope, apply_extends, describe_self};

pub use config::{ContextConfig, LogLevel, TimestampMode};
