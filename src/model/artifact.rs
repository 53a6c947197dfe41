use serde::{Deserialize, Serialize};
use std::fmt;

/// A file declared by a module descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactReference {
    /// Artifact name, usually the module name
    pub name: String,
    /// Artifact type (e.g., "jar", "source", "javadoc")
    #[serde(rename = "type")]
    pub kind: String,
    /// File extension without dot
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ArtifactReference {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            extension: extension.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// File name as stored in a repository: `name[-classifier].extension`
    pub fn file_name(&self) -> String {
        let base = match self.classifier() {
            Some(classifier) => format!("{}-{}", self.name, classifier),
            None => self.name.clone(),
        };

        if self.extension.is_empty() {
            base
        } else {
            format!("{}.{}", base, self.extension)
        }
    }
}

impl fmt::Display for ArtifactReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.file_name(), self.kind)
    }
}
