use super::ContextMode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The capability is absent in this mode; retrying will not help
    #[error("{operation} is not supported by a {mode} parse context")]
    Unsupported {
        operation: &'static str,
        mode: ContextMode,
    },

    #[error("Failed to produce descriptor for {coordinate}: {reason}")]
    Parse { coordinate: String, reason: String },
}

impl ContextError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ContextError::Unsupported { .. })
    }
}
