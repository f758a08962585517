//! Transitions over [`Selection`].

use super::Selection;
use crate::core::{State, StateHistory, StateTransition};
use crate::registry::FriendId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Most transitions a controller keeps; older ones are dropped first.
pub const HISTORY_LIMIT: usize = 256;

/// Current selection plus the log of how it got there.
///
/// Operations return a new controller. Operations that leave the selection
/// as it was record nothing. Only the newest [`HISTORY_LIMIT`] changes are kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionController {
    current: Selection,
    history: StateHistory<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn history(&self) -> &StateHistory<Selection> {
        &self.history
    }

    pub fn selected_friend(&self) -> Option<FriendId> {
        self.current.selected_friend()
    }

    pub fn is_add_panel_open(&self) -> bool {
        self.current.is_add_panel_open()
    }

    pub fn is_selected(&self, friend_id: FriendId) -> bool {
        self.selected_friend() == Some(friend_id)
    }

    /// Open/close button. Opening while a friend is selected drops the
    /// selection; closing always lands on `NoSelection`.
    pub fn toggle_add_friend_panel(&self) -> Self {
        let next = match self.current {
            Selection::AddPanelOpen => Selection::NoSelection,
            Selection::NoSelection | Selection::FriendSelected(_) => Selection::AddPanelOpen,
        };
        self.transition(next, "toggle_add_friend_panel")
    }

    /// Select `friend_id`, or deselect it if it is already the active friend.
    /// The panel is closed either way.
    pub fn select_friend(&self, friend_id: FriendId) -> Self {
        let next = if self.is_selected(friend_id) {
            Selection::NoSelection
        } else {
            Selection::FriendSelected(friend_id)
        };
        self.transition(next, "select_friend")
    }

    pub fn open_add_friend_panel(&self) -> Self {
        self.transition(Selection::AddPanelOpen, "open_add_friend_panel")
    }

    /// Close the panel after a friend was added. Any other state is kept.
    pub fn close_add_friend_panel(&self) -> Self {
        match self.current {
            Selection::AddPanelOpen => {
                self.transition(Selection::NoSelection, "close_add_friend_panel")
            }
            _ => self.clone(),
        }
    }

    /// Drop the active friend after a settled split. Any other state is kept.
    pub fn clear_selection(&self) -> Self {
        match self.current {
            Selection::FriendSelected(_) => self.transition(Selection::NoSelection, "clear_selection"),
            _ => self.clone(),
        }
    }

    fn transition(&self, next: Selection, cause: &str) -> Self {
        if next == self.current {
            return self.clone();
        }

        debug!("Selection {} -> {} ({})", self.current.name(), next.name(), cause);
        Self {
            current: next,
            history: self.history.record_bounded(
                StateTransition::now(self.current, next, cause),
                HISTORY_LIMIT,
            ),
        }
    }
}
