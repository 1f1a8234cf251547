//! Micromachine: a minimal, thread-safe, generic state machine
//!
//! A [`TransitionTable`] holds a current state and a registry of permitted
//! `(from, to)` transitions, each optionally bound to an [`Action`]. Callers
//! request transitions by target state; a transition commits only if it is
//! registered and its action succeeds.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug + Send` value via the `State` trait
//! - **Actions**: fallible callbacks that can veto a transition
//! - **Locking**: one mutex serializes every operation, actions included
//!
//! # Example
//!
//! ```rust
//! use micromachine::core::{TransitionError, TransitionTable};
//!
//! let table = TransitionTable::new("idle");
//! table
//!     .add_transition("idle", "running")
//!     .add_transition_with_action("running", "stopped", || Err("failed action".into()));
//!
//! assert_eq!(table.valid_transitions(), vec!["running"]);
//! table.transition("running").unwrap();
//!
//! let err = table.transition("stopped").unwrap_err();
//! assert!(matches!(err, TransitionError::ActionFailed(_)));
//! assert_eq!(err.to_string(), "failed action");
//! assert_eq!(table.state(), "running");
//! ```

// Lets `state_enum!` name this crate by path from inside it as well.
extern crate self as micromachine;

pub mod builder;
pub mod core;

#[doc(hidden)]
pub use serde as __serde;

// Re-export commonly used types
pub use builder::{BuildError, TransitionTableBuilder};
pub use core::{Action, ActionError, ActionResult, State, TransitionError, TransitionTable};
