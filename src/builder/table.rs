//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Action, ActionResult, State, TransitionTable};

/// Builder for constructing a [`TransitionTable`] with a fluent, owned API.
///
/// Transitions are registered in the order they were added, so a later
/// duplicate `(from, to)` pair replaces an earlier one.
pub struct TransitionTableBuilder<S: State> {
    initial: Option<S>,
    transitions: Vec<(S, S, Option<Action>)>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition with no action.
    pub fn transition(mut self, from: S, to: S) -> Self {
        self.transitions.push((from, to, None));
        self
    }

    /// Add a transition bound to an action.
    pub fn transition_with_action<F>(mut self, from: S, to: S, action: F) -> Self
    where
        F: FnMut() -> ActionResult + Send + 'static,
    {
        self.transitions.push((from, to, Some(Action::new(action))));
        self
    }

    /// Build the table.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let table = TransitionTable::new(initial);
        for (from, to, action) in self.transitions {
            table.register(from, to, action);
        }

        Ok(table)
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    /// Start building a table.
    ///
    /// ```rust
    /// use micromachine::core::TransitionTable;
    ///
    /// let table = TransitionTable::builder()
    ///     .initial(0u8)
    ///     .transition(0, 1)
    ///     .transition(1, 2)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(table.valid_transitions(), vec![1]);
    /// ```
    pub fn builder() -> TransitionTableBuilder<S> {
        TransitionTableBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionTableBuilder::<TestState>::new()
            .transition(TestState::Initial, TestState::Processing)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_empty_registry() {
        let table = TransitionTableBuilder::new()
            .initial(TestState::Initial)
            .build()
            .unwrap();

        assert_eq!(table.state(), TestState::Initial);
        assert!(table.valid_transitions().is_empty());
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTable::builder()
            .initial(TestState::Initial)
            .transition(TestState::Initial, TestState::Processing)
            .transition(TestState::Processing, TestState::Complete)
            .build()
            .unwrap();

        assert!(table.can_transition(&TestState::Processing));
        assert!(table.has_transition(&TestState::Processing, &TestState::Complete));

        table.transition(TestState::Processing).unwrap();
        table.transition(TestState::Complete).unwrap();
        assert_eq!(table.state(), TestState::Complete);
    }

    #[test]
    fn later_duplicate_wins() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        let table = TransitionTable::builder()
            .initial(TestState::Initial)
            .transition_with_action(TestState::Initial, TestState::Processing, || {
                Err("stale action".into())
            })
            .transition_with_action(TestState::Initial, TestState::Processing, move || {
                flag.store(true, Ordering::SeqCst);
                Ok(())
            })
            .build()
            .unwrap();

        table.transition(TestState::Processing).unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }
}
