//! Selection transition history.
//!
//! An append-only log of state changes. Recording returns a new history, so
//! a session value captured earlier keeps the log it had at the time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The user action that caused the change, e.g. `"select_friend"`
    pub cause: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a transition stamped with the current time.
    pub fn now(from: S, to: S, cause: impl Into<String>) -> Self {
        Self {
            from,
            to,
            cause: cause.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state changes.
///
/// # Example
///
/// ```rust
/// use splitbill::core::{StateHistory, StateTransition};
/// use splitbill::Selection;
///
/// let history = StateHistory::new().record(StateTransition::now(
///     Selection::NoSelection,
///     Selection::AddPanelOpen,
///     "toggle_add_friend_panel",
/// ));
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.get_path(), vec![&Selection::NoSelection, &Selection::AddPanelOpen]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Record a transition, keeping at most `limit` of the newest entries.
    ///
    /// Older entries are dropped from the front, so `get_path` then starts
    /// at the `from` of the oldest retained change.
    pub fn record_bounded(&self, transition: StateTransition<S>, limit: usize) -> Self {
        let keep = limit.saturating_sub(1);
        let skip = self.transitions.len().saturating_sub(keep);
        let mut transitions: Vec<_> = self.transitions[skip..].to_vec();
        if limit > 0 {
            transitions.push(transition);
        }
        Self { transitions }
    }

    /// The most recent change, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
