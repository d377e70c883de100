//! The state machine itself.
//!
//! [`FiniteStateMachine`] ties a validated [`MachineConfig`](crate::core::MachineConfig)
//! to a current state and an undo/redo [`History`](crate::core::History).
//! All operations are synchronous and leave the machine unchanged on error.

mod error;
mod fsm;
mod options;

pub use error::{ConfigError, FsmError};
pub use fsm::FiniteStateMachine;
pub use options::MachineOptions;
