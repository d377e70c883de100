//! Finite state machine with linear undo/redo history.

use crate::core::{
    validate, EventId, History, MachineConfig, StateId, StateTransition, TransitionKind,
};
use crate::machine::error::{ConfigError, FsmError};
use crate::machine::options::MachineOptions;

/// A finite state machine driven by named events or direct jumps.
///
/// The machine owns its configuration, the current state, and a [`History`]
/// of past and undone states. Every operation either succeeds completely or
/// returns an error and leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use retrace::machine_config;
/// use retrace::machine::FiniteStateMachine;
///
/// let config = machine_config! {
///     initial: idle,
///     idle { start => running },
///     running { stop => idle, pause => paused },
///     paused { resume => running },
/// };
///
/// let mut fsm = FiniteStateMachine::new(config)?;
/// fsm.trigger("start")?;
/// fsm.trigger("pause")?;
/// assert_eq!(fsm.state(), "paused");
///
/// assert!(fsm.undo());
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
/// assert!(!fsm.undo());
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "running");
/// # Ok::<(), retrace::machine::FsmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine {
    config: MachineConfig,
    options: MachineOptions,
    current: StateId,
    history: History,
}

impl FiniteStateMachine {
    /// Build a machine with default options.
    pub fn new(config: MachineConfig) -> Result<Self, FsmError> {
        Self::with_options(config, MachineOptions::default())
    }

    /// Build a machine from a configuration that may be absent.
    ///
    /// Fails with [`ConfigError::Missing`] when `config` is `None`.
    pub fn from_config(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        let config = config.ok_or(ConfigError::Missing)?;
        Self::new(config)
    }

    /// Build a machine, validating the configuration as `options` ask.
    ///
    /// The initial state is always required to be a configured state.
    pub fn with_options(config: MachineConfig, options: MachineOptions) -> Result<Self, FsmError> {
        validate::validate(&config, options.validation)
            .map_err(|violations| ConfigError::Invalid { violations })?;

        tracing::debug!(
            "state machine created in state '{}' with {} states",
            config.initial,
            config.states.len()
        );

        Ok(Self {
            current: config.initial.clone(),
            history: History::with_limit(options.history_limit),
            config,
            options,
        })
    }

    /// The active state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// The state the machine starts in and returns to on [`reset`](Self::reset).
    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    /// Configured states in declaration order.
    ///
    /// With `Some(event)`, only the states that define a transition for that
    /// event are returned. An unknown event yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            None => self.config.states.ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Events the active state reacts to, in sorted order.
    pub fn events(&self) -> Vec<&EventId> {
        self.config
            .states
            .get(&self.current)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Jump directly to `target`.
    ///
    /// Fails with [`FsmError::UnknownState`] if `target` is not configured.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        let (target, _) = self
            .config
            .states
            .get_key_value(target)
            .ok_or_else(|| FsmError::UnknownState {
                state: target.to_string(),
            })?;

        let target = target.clone();
        self.commit(target, TransitionKind::Jump);
        Ok(())
    }

    /// Follow the active state's transition for `event`.
    ///
    /// Fails with [`FsmError::InvalidEvent`] if the active state defines no
    /// such transition. The target itself is not checked against the
    /// configured states unless the machine was built in strict mode.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let (event_id, target) = self
            .config
            .states
            .get(&self.current)
            .and_then(|definition| definition.transitions.get_key_value(event))
            .ok_or_else(|| FsmError::InvalidEvent {
                event: event.to_string(),
                state: self.current.clone(),
            })?;

        let kind = TransitionKind::Event(event_id.clone());
        let target = target.clone();
        self.commit(target, kind);
        Ok(())
    }

    /// Return to the initial state and forget all history.
    pub fn reset(&mut self) {
        tracing::debug!("resetting from '{}' to '{}'", self.current, self.config.initial);
        self.current = self.config.initial.clone();
        self.history.clear();
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` and changes nothing if there is no history to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.current.clone()) else {
            tracing::trace!("undo requested in '{}' with empty history", self.current);
            return false;
        };

        self.travel(previous, TransitionKind::Undo);
        true
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` and changes nothing if nothing has been undone since
    /// the last state change.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.current.clone()) else {
            tracing::trace!("redo requested in '{}' with nothing to redo", self.current);
            return false;
        };

        self.travel(next, TransitionKind::Redo);
        true
    }

    /// Forget all undo and redo history; the active state is kept.
    pub fn clear_history(&mut self) {
        tracing::debug!("clearing history in '{}'", self.current);
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Apply a fresh change: the state being left goes onto the past stack
    /// and the redo path is dropped.
    fn commit(&mut self, target: StateId, kind: TransitionKind) {
        let from = std::mem::replace(&mut self.current, target);
        tracing::debug!("state changed '{}' -> '{}' ({:?})", from, self.current, kind);

        self.history.record(from.clone());
        self.history
            .log(StateTransition::now(from, self.current.clone(), kind));
    }

    /// Move to a state taken from the history stacks.
    fn travel(&mut self, target: StateId, kind: TransitionKind) {
        let from = std::mem::replace(&mut self.current, target);
        tracing::debug!("{:?} '{}' -> '{}'", kind, from, self.current);

        self.history
            .log(StateTransition::now(from, self.current.clone(), kind));
    }
}
