use crate::context::{
    ConnectedParseContext, ContextMode, DisconnectedParseContext, ParseContext, TimestampPolicy,
};
use crate::model::{ModuleCoordinate, STATUS_INTEGRATION};
use crate::resolver::{RepositoryIndex, StaticResolver};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// When synthesized descriptors are timestamped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampMode {
    #[default]
    PerCall,
    /// Captured once when the context is built
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Settings for building a parse context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub mode: ContextMode,
    pub default_status: String,
    pub timestamps: TimestampMode,
    pub log_level: LogLevel,
    /// Repository index backing connected mode
    pub index: Option<PathBuf>,
    /// Module of the resolution session in connected mode
    pub module: Option<ModuleCoordinate>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            mode: ContextMode::Disconnected,
            default_status: STATUS_INTEGRATION.to_string(),
            timestamps: TimestampMode::PerCall,
            log_level: LogLevel::Info,
            index: None,
            module: None,
        }
    }
}

impl ContextConfig {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Build the configured context
    ///
    /// Connected mode needs both an index and a session module.
    pub fn build(&self) -> Result<Box<dyn ParseContext>> {
        match self.mode {
            ContextMode::Disconnected => {
                let timestamps = match self.timestamps {
                    TimestampMode::PerCall => TimestampPolicy::PerCall,
                    TimestampMode::Frozen => TimestampPolicy::frozen_now(),
                };
                Ok(Box::new(DisconnectedParseContext::with_timestamps(
                    self.default_status.clone(),
                    timestamps,
                )))
            }
            ContextMode::Connected => {
                let Some(index_path) = &self.index else {
                    bail!("Connected mode requires a repository index");
                };
                let Some(module) = &self.module else {
                    bail!("Connected mode requires the module being resolved");
                };

                let index = RepositoryIndex::load(index_path)?;
                Ok(Box::new(ConnectedParseContext::new(
                    StaticResolver::from(index),
                    module.clone(),
                    self.default_status.clone(),
                )))
            }
        }
    }
}
