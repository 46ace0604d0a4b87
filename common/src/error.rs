use thiserror::Error;

/// Rejected probe configuration.
///
/// These are raised before any connection is attempted. Network conditions
/// are never reported through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid target '{input}': {reason}")]
    InvalidTarget { input: String, reason: String },

    #[error("target name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

impl ConfigError {
    pub(crate) fn invalid_target(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
