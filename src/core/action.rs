//! Side-effecting actions bound to transitions.
//!
//! An action runs while the table's guard is held, right before the new
//! state is committed. Returning an error vetoes the transition.

use std::fmt;

/// Error reported by an action. Preserved verbatim by the table.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result returned by every action.
pub type ActionResult = Result<(), ActionError>;

/// A nullary, fallible callback bound to a `(from, to)` transition.
///
/// Actions are `FnMut`, so they may mutate captured state directly. They
/// must not call back into the table they are registered on: the table's
/// lock is held for the whole call and is not reentrant.
///
/// # Example
///
/// ```rust
/// use micromachine::core::Action;
///
/// let mut calls = 0;
/// let mut action = Action::new(move || {
///     calls += 1;
///     if calls > 1 {
///         return Err("already ran".into());
///     }
///     Ok(())
/// });
///
/// assert!(action.run().is_ok());
/// assert_eq!(action.run().unwrap_err().to_string(), "already ran");
/// ```
pub struct Action {
    callback: Box<dyn FnMut() -> ActionResult + Send>,
}

impl Action {
    /// Wrap a callback as an action.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut() -> ActionResult + Send + 'static,
    {
        Action {
            callback: Box::new(callback),
        }
    }

    /// Invoke the callback once.
    pub fn run(&mut self) -> ActionResult {
        (self.callback)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
