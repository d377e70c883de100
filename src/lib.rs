//! Retrace: a finite state machine with undo/redo history
//!
//! A machine is built from a static configuration: an initial state and,
//! for every state, a table mapping event names to target states. The
//! machine tracks the active state, moves on named events or direct jumps,
//! and keeps a linear undo/redo history of every change.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig` with states in declaration order
//! - **Machine**: `FiniteStateMachine` applies events and jumps atomically
//! - **History**: two stacks (past, future) with redo invalidated by new changes
//!
//! # Example
//!
//! ```rust
//! use retrace::builder::ConfigBuilder;
//! use retrace::machine::{FiniteStateMachine, FsmError};
//!
//! let config = ConfigBuilder::new()
//!     .initial("idle")
//!     .transition("idle", "start", "running")
//!     .transition("running", "stop", "idle")
//!     .build()
//!     .unwrap();
//!
//! let mut fsm = FiniteStateMachine::new(config)?;
//! fsm.trigger("start")?;
//! assert_eq!(fsm.state(), "running");
//!
//! assert!(matches!(fsm.trigger("start"), Err(FsmError::InvalidEvent { .. })));
//!
//! fsm.undo();
//! assert_eq!(fsm.state(), "idle");
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{EventId, History, MachineConfig, StateDefinition, StateId};
pub use machine::{ConfigError, FiniteStateMachine, FsmError, MachineOptions};
