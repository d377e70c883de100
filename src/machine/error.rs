//! Errors raised by the state machine.

use crate::core::{ConfigViolation, StateId};
use thiserror::Error;

/// Errors that can occur when constructing a machine from a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no configuration provided")]
    Missing,

    #[error("invalid configuration: {}", join(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

/// Errors returned by state machine operations.
///
/// A failed operation never changes the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("unknown state '{state}'")]
    UnknownState { state: String },

    #[error("event '{event}' is not defined for state '{state}'")]
    InvalidEvent { event: String, state: StateId },
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
