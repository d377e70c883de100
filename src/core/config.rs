//! Static machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. It is plain data: building
//! or deserializing one performs no validation. Checks happen when a
//! [`FiniteStateMachine`](crate::machine::FiniteStateMachine) is constructed.

use super::id::{EventId, StateId};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Outgoing transitions of a single state.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDefinition;
///
/// let running = StateDefinition::new()
///     .on("stop", "idle")
///     .on("pause", "paused");
///
/// assert_eq!(running.target("pause").map(|s| s.as_str()), Some("paused"));
/// assert!(running.handles("stop"));
/// assert!(!running.handles("start"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to target state.
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target reached by `event`, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    /// Whether this state defines a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events this state reacts to, in sorted order.
    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.transitions.keys()
    }
}

/// State definitions keyed by state id, kept in declaration order.
///
/// Inserting an id that is already present replaces its definition but keeps
/// the position of the first declaration, matching how object keys behave in
/// most configuration formats.
#[derive(Clone, Debug, Default)]
pub struct StateTable {
    entries: Vec<(StateId, StateDefinition)>,
    index: HashMap<StateId, usize>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state, returning the definition it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        let id = id.into();
        match self.index.get(id.as_str()) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, definition)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, definition));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.index.get(id).map(|&position| &self.entries[position].1)
    }

    /// Stored key and definition for `id`.
    pub fn get_key_value(&self, id: &str) -> Option<(&StateId, &StateDefinition)> {
        self.index
            .get(id)
            .map(|&position| (&self.entries[position].0, &self.entries[position].1))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut StateDefinition> {
        let position = *self.index.get(id)?;
        Some(&mut self.entries[position].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// State ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &StateId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// States and their definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.entries.iter().map(|(id, definition)| (id, definition))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for StateTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StateTable {}

impl<K: Into<StateId>> FromIterator<(K, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (id, definition) in iter {
            table.insert(id, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = StateTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of state ids to state definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StateTable, A::Error> {
                let mut table = StateTable::new();
                while let Some((id, definition)) = map.next_entry::<StateId, StateDefinition>()? {
                    table.insert(id, definition);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Complete machine configuration: the initial state and every state's transitions.
///
/// # Example
///
/// ```rust
/// use retrace::core::{MachineConfig, StateDefinition};
///
/// let config = MachineConfig::new("idle")
///     .with_state("idle", StateDefinition::new().on("start", "running"))
///     .with_state("running", StateDefinition::new().on("stop", "idle"));
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset.
    pub initial: StateId,
    /// Every configured state, in declaration order.
    pub states: StateTable,
}

impl MachineConfig {
    /// A configuration with no states yet.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: StateTable::new(),
        }
    }

    /// Declare a state.
    pub fn with_state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id, definition);
        self
    }
}
