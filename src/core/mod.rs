//! Core data types of the state machine.
//!
//! This module contains the plain data the machine is built from:
//! - Identifiers for states and events
//! - The static configuration (states and their transition tables)
//! - Undo/redo history and the transition journal
//! - Construction-time validation of configurations
//!
//! Nothing here performs I/O or holds global state.

mod config;
mod history;
mod id;
pub mod validate;

pub use config::{MachineConfig, StateDefinition, StateTable};
pub use history::{History, StateTransition, TransitionKind};
pub use id::{EventId, StateId};
pub use validate::{ConfigViolation, TargetValidation};
