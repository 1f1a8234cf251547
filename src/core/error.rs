//! Errors returned by [`TransitionTable::transition`](super::TransitionTable::transition).

use super::action::ActionError;
use super::state::State;
use thiserror::Error;

/// Errors that can occur during a transition.
///
/// Neither variant is fatal: the table keeps its previous state and stays
/// usable.
#[derive(Debug, Error)]
pub enum TransitionError<S: State> {
    /// No transition is registered from the current state to the target.
    #[error("invalid state transition from {from:?} to {to:?}")]
    InvalidTransition { from: S, to: S },

    /// The bound action vetoed the transition.
    #[error(transparent)]
    ActionFailed(ActionError),
}

impl<S: State> TransitionError<S> {
    /// True for [`TransitionError::InvalidTransition`].
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// The action's own error, if the action vetoed the transition.
    pub fn action_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::ActionFailed(err) => Some(err.as_ref()),
            Self::InvalidTransition { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
    }

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    #[test]
    fn invalid_transition_names_both_states() {
        let err = TransitionError::InvalidTransition {
            from: TestState::Idle,
            to: TestState::Running,
        };

        assert_eq!(
            err.to_string(),
            "invalid state transition from Idle to Running"
        );
        assert!(err.is_invalid_transition());
        assert!(err.action_error().is_none());
    }

    #[test]
    fn action_failure_displays_action_message() {
        let err: TransitionError<TestState> = TransitionError::ActionFailed("failed action".into());

        assert_eq!(err.to_string(), "failed action");
        assert!(!err.is_invalid_transition());
    }

    #[test]
    fn action_failure_keeps_error_type() {
        let err: TransitionError<&str> = TransitionError::ActionFailed(Box::new(DiskFull));

        let inner = err.action_error().unwrap();
        assert!(inner.downcast_ref::<DiskFull>().is_some());
    }
}
