//! Builder API for ergonomic table construction.
//!
//! This module provides a fluent builder and a state declaration macro for
//! setting up transition tables with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TransitionTableBuilder;

use crate::core::{State, TransitionTable};

/// Build a table whose transitions form a straight line through `states`.
///
/// The first state is the initial state; each state may move to the next.
/// Returns an error if `states` is empty.
///
/// # Example
///
/// ```
/// use micromachine::builder::linear;
///
/// let table = linear(["draft", "review", "published"]).unwrap();
///
/// assert_eq!(table.state(), "draft");
/// assert!(table.can_transition(&"review"));
/// assert!(!table.can_transition(&"published"));
/// ```
pub fn linear<S, I>(states: I) -> Result<TransitionTable<S>, BuildError>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    let mut states = states.into_iter();
    let mut builder = TransitionTableBuilder::new();
    let Some(mut previous) = states.next() else {
        return builder.build();
    };
    builder = builder.initial(previous.clone());
    for next in states {
        builder = builder.transition(previous, next.clone());
        previous = next;
    }
    builder.build()
}
