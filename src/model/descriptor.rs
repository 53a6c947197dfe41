use super::ModuleCoordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_INTEGRATION: &str = "integration";
pub const STATUS_MILESTONE: &str = "milestone";
pub const STATUS_RELEASE: &str = "release";

/// Parsed or synthesized metadata of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub coordinate: ModuleCoordinate,
    /// Status on the publication ladder (e.g., "integration", "release")
    pub status: String,
    /// Publication timestamp
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub dependencies: Vec<ModuleCoordinate>,
}

impl ModuleDescriptor {
    /// Create a descriptor with no dependencies
    pub fn new(
        coordinate: ModuleCoordinate,
        status: impl Into<String>,
        published: DateTime<Utc>,
    ) -> Self {
        Self {
            coordinate,
            status: status.into(),
            published,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: ModuleCoordinate) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn depends_on(&self, coordinate: &ModuleCoordinate) -> bool {
        self.dependencies.contains(coordinate)
    }
}
