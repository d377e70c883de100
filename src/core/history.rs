//! Undo/redo history and the transition journal.
//!
//! History is two stacks of state ids: `past` holds the states visited
//! before the current one (oldest first) and `future` holds states that
//! were undone (most recently undone last). Recording a fresh change
//! invalidates the redo path. Alongside the stacks, every state change is
//! appended to a timestamped journal.

use super::id::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Direct jump via `change_state`.
    Jump,
    /// Event resolved through the current state's transition table.
    Event(EventId),
    /// Step back through the past stack.
    Undo,
    /// Step forward through the future stack.
    Redo,
}

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// What caused the change
    pub kind: TransitionKind,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// A transition stamped with the current time.
    pub fn now(from: StateId, to: StateId, kind: TransitionKind) -> Self {
        Self {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Past/future stacks plus the journal of every change.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, StateId};
///
/// let mut history = History::new();
/// history.record(StateId::from("idle"));
///
/// // Currently in "running"; step back to "idle".
/// let previous = history.undo(StateId::from("running"));
/// assert_eq!(previous, Some(StateId::from("idle")));
/// assert!(history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    past: Vec<StateId>,
    future: Vec<StateId>,
    journal: Vec<StateTransition>,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo steps and journal entries.
    /// Older entries are dropped first.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Push the state being left onto the past stack and drop the redo path.
    pub fn record(&mut self, previous: StateId) {
        self.future.clear();
        self.past.push(previous);
        trim_front(&mut self.past, self.limit);
    }

    /// Step back: returns the previous state and parks `current` for redo.
    /// Returns `None` without touching either stack when there is nothing to undo.
    pub fn undo(&mut self, current: StateId) -> Option<StateId> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward: returns the next state and pushes `current` onto the past stack.
    /// Returns `None` without touching either stack when there is nothing to redo.
    pub fn redo(&mut self, current: StateId) -> Option<StateId> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Append a change to the journal.
    pub fn log(&mut self, transition: StateTransition) {
        self.journal.push(transition);
        trim_front(&mut self.journal, self.limit);
    }

    /// Empty both stacks and the journal.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.journal.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// States available for undo, oldest first.
    pub fn past(&self) -> &[StateId] {
        &self.past
    }

    /// States available for redo, most recently undone last.
    pub fn future(&self) -> &[StateId] {
        &self.future
    }

    /// Every recorded change in order.
    pub fn journal(&self) -> &[StateTransition] {
        &self.journal
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// States traversed according to the journal: the first `from`, then
    /// each `to`.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.journal.len() + 1);
        if let Some(first) = self.journal.first() {
            path.push(&first.from);
        }
        path.extend(self.journal.iter().map(|transition| &transition.to));
        path
    }

    /// Time between the first and last journal entries.
    ///
    /// Returns `None` if the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.journal.first()?, self.journal.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

fn trim_front<T>(entries: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        if entries.len() > limit {
            let excess = entries.len() - limit;
            entries.drain(..excess);
        }
    }
}
