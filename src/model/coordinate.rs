use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("Expected group:name:version, found {segments} segment(s) in '{input}'")]
    WrongArity { input: String, segments: usize },

    #[error("Empty {field} in coordinate '{input}'")]
    EmptySegment { input: String, field: &'static str },
}

/// Identity of a module: group, name and version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCoordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Same module at a different version
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            group: self.group.clone(),
            name: self.name.clone(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for ModuleCoordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let parts: Vec<&str> = input.split(':').map(str::trim).collect();

        let [group, name, version] = parts.as_slice() else {
            return Err(CoordinateParseError::WrongArity {
                input: input.to_string(),
                segments: parts.len(),
            });
        };

        for (field, value) in [("group", group), ("name", name), ("version", version)] {
            if value.is_empty() {
                return Err(CoordinateParseError::EmptySegment {
                    input: input.to_string(),
                    field,
                });
            }
        }

        Ok(Self::new(*group, *name, *version))
    }
}

impl Serialize for ModuleCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ModuleCoordinate::from_str(&value).map_err(serde::de::Error::custom)
    }
}
