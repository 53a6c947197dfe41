mod artifact;
mod coordinate;
mod descriptor;


pub use artifact::ArtifactReference;
pub use coordinate::{CoordinateParseError, ModuleCoordinate};
pub use descriptor::{ModuleDescriptor, STATUS_INTEGRATION, STATUS_MILESTONE, STATUS_RELEASE};
