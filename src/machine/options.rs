//! Runtime options for a state machine.

use crate::core::TargetValidation;
use serde::{Deserialize, Serialize};

/// Options applied when a machine is constructed.
///
/// The defaults check only the initial state and keep unbounded history.
///
/// # Example
///
/// ```rust
/// use retrace::core::TargetValidation;
/// use retrace::machine::MachineOptions;
///
/// let options = MachineOptions::strict().history_limit(50);
/// assert_eq!(options.validation, TargetValidation::Strict);
/// assert_eq!(options.history_limit, Some(50));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineOptions {
    /// How much of the transition graph to validate up front.
    #[serde(default)]
    pub validation: TargetValidation,
    /// Maximum undo steps and journal entries kept; `None` keeps everything.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl MachineOptions {
    /// Default options with full graph validation.
    pub fn strict() -> Self {
        Self {
            validation: TargetValidation::Strict,
            ..Self::default()
        }
    }

    /// Keep at most `limit` undo steps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn validation(mut self, validation: TargetValidation) -> Self {
        self.validation = validation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient_and_unbounded() {
        let options = MachineOptions::default();
        assert_eq!(options.validation, TargetValidation::Lenient);
        assert_eq!(options.history_limit, None);
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let options: MachineOptions = serde_json::from_str(r#"{ "history_limit": 3 }"#).unwrap();
        assert_eq!(options, MachineOptions::default().history_limit(3));

        let options: MachineOptions =
            serde_json::from_str(r#"{ "validation": "Strict" }"#).unwrap();
        assert_eq!(options, MachineOptions::strict());
    }
}
