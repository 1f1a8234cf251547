//! The `State` bound shared by every state machine type.
//!
//! The table never interprets a state: it only compares, hashes, clones and
//! prints it. Any type meeting those requirements is a state.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented automatically for every type that satisfies the bounds, so
/// strings, integers and plain enums can be used directly.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `Eq` + `Hash`: states key the transition registry
/// - `Debug`: states appear in errors and log events
/// - `Send` + `'static`: tables are shared across threads
///
/// # Example
///
/// ```rust
/// use micromachine::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&TaskState::Pending);
/// assert_state(&"running");
/// assert_state(&42u32);
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Send + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionTable;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct Stage {
        pipeline: String,
        step: u32,
    }

    fn stage(step: u32) -> Stage {
        Stage {
            pipeline: "ingest".to_string(),
            step,
        }
    }

    fn assert_state<S: State>(_: &S) {}

    #[test]
    fn owned_struct_states_drive_a_table() {
        assert_state(&stage(0));

        let table = TransitionTable::new(stage(0));
        table
            .add_transition(stage(0), stage(1))
            .add_transition(stage(1), stage(2));

        table.transition(stage(1)).unwrap();
        assert_eq!(table.state(), stage(1));
        assert!(table.can_transition(&stage(2)));
        assert!(table.transition(stage(0)).is_err());
        assert_eq!(table.state().pipeline, "ingest");
    }
}
