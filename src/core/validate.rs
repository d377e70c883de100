//! Construction-time configuration checks.
//!
//! Checks run through Stillwater's `Validation` so every problem in a
//! configuration is reported at once instead of one per attempt.

use super::config::MachineConfig;
use super::id::{EventId, StateId};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// How much of the transition graph is checked at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetValidation {
    /// Only the initial state is checked. Event targets are taken on faith
    /// and a trigger may land on a state that has no definition.
    #[default]
    Lenient,
    /// Every transition target and identifier is checked.
    Strict,
}

/// A single problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("initial state '{initial}' is not a configured state")]
    UnknownInitial { initial: StateId },

    #[error("state '{state}' maps event '{event}' to unknown state '{target}'")]
    DanglingTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    #[error("a state is declared with an empty id")]
    EmptyStateId,

    #[error("state '{state}' declares an event with an empty id")]
    EmptyEventId { state: StateId },
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// The initial state must be declared.
pub fn check_initial(config: &MachineConfig) -> Check {
    check(config.states.contains(&config.initial), || {
        ConfigViolation::UnknownInitial {
            initial: config.initial.clone(),
        }
    })
}

/// Every transition target must be declared.
pub fn check_targets(config: &MachineConfig) -> Vec<Check> {
    config
        .states
        .iter()
        .flat_map(|(state, definition)| {
            definition.transitions.iter().map(move |(event, target)| {
                check(config.states.contains(target), || {
                    ConfigViolation::DanglingTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }
                })
            })
        })
        .collect()
}

/// No state or event may be named by the empty string.
pub fn check_identifiers(config: &MachineConfig) -> Vec<Check> {
    let mut checks = Vec::new();
    for (state, definition) in config.states.iter() {
        checks.push(check(!state.is_empty(), || ConfigViolation::EmptyStateId));
        checks.push(check(!definition.events().any(|event| event.is_empty()), || {
            ConfigViolation::EmptyEventId {
                state: state.clone(),
            }
        }));
    }
    checks
}

/// Run the checks selected by `mode`, collecting every violation.
///
/// # Example
///
/// ```rust
/// use retrace::core::{validate, ConfigViolation, MachineConfig, StateDefinition, TargetValidation};
///
/// let config = MachineConfig::new("a")
///     .with_state("a", StateDefinition::new().on("go", "b").on("skip", "c"));
///
/// assert!(validate::validate(&config, TargetValidation::Lenient).is_ok());
///
/// let violations = validate::validate(&config, TargetValidation::Strict).unwrap_err();
/// assert_eq!(violations.len(), 2);
/// assert!(matches!(violations[0], ConfigViolation::DanglingTarget { .. }));
/// ```
pub fn validate(config: &MachineConfig, mode: TargetValidation) -> Result<(), Vec<ConfigViolation>> {
    let mut checks = vec![check_initial(config)];
    if mode == TargetValidation::Strict {
        checks.extend(check_identifiers(config));
        checks.extend(check_targets(config));
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
    }
}
