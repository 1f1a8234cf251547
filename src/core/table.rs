//! The transition table: current state, registry and the guard around both.

use super::action::{Action, ActionResult};
use super::error::TransitionError;
use super::state::State;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// from-state -> (to-state -> optional action)
type Registry<S> = HashMap<S, HashMap<S, Option<Action>>>;

struct Inner<S: State> {
    state: S,
    transitions: Registry<S>,
}

/// A thread-safe finite state machine.
///
/// Callers register permitted `(from, to)` transitions, each optionally
/// bound to an [`Action`], and then request transitions by target state.
/// Every operation takes `&self`; share the table through an `Arc`.
///
/// # Locking
///
/// All operations serialize on one non-reentrant mutex, held for the full
/// duration of the call. For [`transition`](Self::transition) that includes
/// running the action, so:
///
/// - an action must not call back into the same table; doing so deadlocks,
/// - a slow action stalls every other caller of the table,
/// - there is no timeout or cancellation.
///
/// Failures are reported only through return values; the `tracing` events
/// emitted here are diagnostics and carry no error handling.
///
/// # Example
///
/// ```rust
/// use micromachine::core::TransitionTable;
///
/// let table = TransitionTable::new("idle");
/// table
///     .add_transition("idle", "running")
///     .add_transition("running", "stopped");
///
/// table.transition("running").unwrap();
/// assert_eq!(table.state(), "running");
///
/// assert!(table.transition("idle").is_err());
/// assert_eq!(table.state(), "running");
/// ```
pub struct TransitionTable<S: State> {
    inner: Mutex<Inner<S>>,
}

impl<S: State> TransitionTable<S> {
    /// Create a table in `initial` with no registered transitions.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: initial,
                transitions: HashMap::new(),
            }),
        }
    }

    /// Register `from -> to`, bound to `action` (or to nothing).
    ///
    /// Registering the same pair again replaces the previous action. No
    /// validation is performed on either state.
    pub fn register(&self, from: S, to: S, action: Option<Action>) -> &Self {
        let mut inner = self.inner.lock();
        trace!(?from, ?to, has_action = action.is_some(), "registering transition");
        let targets = inner.transitions.entry(from).or_default();
        if targets.insert(to, action).is_some() {
            trace!("replaced existing transition");
        }
        self
    }

    /// Register `from -> to` with no action.
    pub fn add_transition(&self, from: S, to: S) -> &Self {
        self.register(from, to, None)
    }

    /// Register `from -> to`, running `action` before the state is committed.
    ///
    /// ```rust
    /// use micromachine::core::TransitionTable;
    ///
    /// let table = TransitionTable::new("idle");
    /// table.add_transition_with_action("idle", "running", || Err("failed action".into()));
    ///
    /// let err = table.transition("running").unwrap_err();
    /// assert_eq!(err.to_string(), "failed action");
    /// assert_eq!(table.state(), "idle");
    /// ```
    pub fn add_transition_with_action<F>(&self, from: S, to: S, action: F) -> &Self
    where
        F: FnMut() -> ActionResult + Send + 'static,
    {
        self.register(from, to, Some(Action::new(action)))
    }

    /// Whether a transition from the current state to `to` is registered.
    ///
    /// The answer is a snapshot; another caller may change the state before
    /// the result is used.
    pub fn can_transition(&self, to: &S) -> bool {
        let inner = self.inner.lock();
        inner
            .transitions
            .get(&inner.state)
            .is_some_and(|targets| targets.contains_key(to))
    }

    /// Whether `from -> to` is registered, regardless of the current state.
    pub fn has_transition(&self, from: &S, to: &S) -> bool {
        self.inner
            .lock()
            .transitions
            .get(from)
            .is_some_and(|targets| targets.contains_key(to))
    }

    /// Every target reachable from the current state, in no particular order.
    pub fn valid_transitions(&self) -> Vec<S> {
        let inner = self.inner.lock();
        inner
            .transitions
            .get(&inner.state)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Move to `to`.
    ///
    /// Fails with [`TransitionError::InvalidTransition`] if no transition from
    /// the current state to `to` is registered. If an action is bound it runs
    /// first, under the lock; an error from it is returned as
    /// [`TransitionError::ActionFailed`] and the state is left unchanged.
    pub fn transition(&self, to: S) -> Result<(), TransitionError<S>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let Some(action) = inner
            .transitions
            .get_mut(&inner.state)
            .and_then(|targets| targets.get_mut(&to))
        else {
            debug!(from = ?inner.state, ?to, "rejected unregistered transition");
            return Err(TransitionError::InvalidTransition {
                from: inner.state.clone(),
                to,
            });
        };

        if let Some(action) = action.as_mut() {
            if let Err(err) = action.run() {
                debug!(from = ?inner.state, ?to, error = %err, "transition action failed");
                return Err(TransitionError::ActionFailed(err));
            }
        }

        let from = std::mem::replace(&mut inner.state, to);
        debug!(?from, to = ?inner.state, "transition committed");
        Ok(())
    }

    /// The current state.
    pub fn state(&self) -> S {
        self.inner.lock().state.clone()
    }
}

impl<S: State> fmt::Debug for TransitionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        let registered: usize = inner.transitions.values().map(HashMap::len).sum();
        f.debug_struct("TransitionTable")
            .field("state", &inner.state)
            .field("transitions", &registered)
            .finish()
    }
}
