//! Core state machine types and logic.
//!
//! This module contains the whole engine:
//! - the `State` bound for state values
//! - `Action` callbacks bound to transitions
//! - `TransitionTable`, the thread-safe registry and current state
//! - `TransitionError`, returned when a transition does not commit

mod action;
mod error;
mod state;
mod table;

pub use action::{Action, ActionError, ActionResult};
pub use error::TransitionError;
pub use state::State;
pub use table::TransitionTable;
