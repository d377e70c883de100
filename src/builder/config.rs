//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{EventId, MachineConfig, StateDefinition, StateId, StateTable};

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use retrace::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("locked")
///     .transition("locked", "coin", "unlocked")
///     .transition("unlocked", "push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "locked");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with a complete definition, replacing any earlier one.
    pub fn state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id, definition);
        self
    }

    /// Add a single transition. `from` is declared if it has not been yet;
    /// `to` is not.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let from = from.into();
        if !self.states.contains(&from) {
            self.states.insert(from.clone(), StateDefinition::new());
        }
        if let Some(definition) = self.states.get_mut(&from) {
            definition.transitions.insert(event.into(), to.into());
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = ConfigBuilder::new().transition("a", "go", "b").build();
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigBuilder::new().initial("a").build();
        assert_eq!(result, Err(BuildError::NoStates));
    }

    #[test]
    fn transition_declares_source_state_once() {
        let config = ConfigBuilder::new()
            .initial("running")
            .transition("running", "stop", "idle")
            .transition("running", "pause", "paused")
            .build()
            .unwrap();

        assert_eq!(config.states.len(), 1);
        let running = config.states.get("running").unwrap();
        assert_eq!(running.target("stop"), Some(&StateId::from("idle")));
        assert_eq!(running.target("pause"), Some(&StateId::from("paused")));
        assert!(!config.states.contains("idle"));
    }

    #[test]
    fn state_and_transition_combine_in_declaration_order() {
        let config = ConfigBuilder::new()
            .initial("idle")
            .state("idle", StateDefinition::new().on("start", "running"))
            .transition("running", "stop", "idle")
            .state("paused", StateDefinition::new())
            .transition("paused", "resume", "running")
            .build()
            .unwrap();

        let ids: Vec<&str> = config.states.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["idle", "running", "paused"]);
        assert!(config.states.get("paused").unwrap().handles("resume"));
    }
}
