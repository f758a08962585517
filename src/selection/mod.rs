//! Selection controller: which friend is active, and whether the
//! add-friend panel is open.
//!
//! The two are mutually exclusive, so they are one tagged value rather than
//! an optional id next to a boolean.

mod controller;

pub use controller::{SelectionController, HISTORY_LIMIT};

use crate::core::State;
use crate::registry::FriendId;
use serde::{Deserialize, Serialize};

/// What the sidebar is focused on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoSelection,
    FriendSelected(FriendId),
    AddPanelOpen,
}

impl Selection {
    pub fn selected_friend(&self) -> Option<FriendId> {
        match self {
            Self::FriendSelected(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_add_panel_open(&self) -> bool {
        matches!(self, Self::AddPanelOpen)
    }
}

impl State for Selection {
    fn name(&self) -> &str {
        match self {
            Self::NoSelection => "NoSelection",
            Self::FriendSelected(_) => "FriendSelected",
            Self::AddPanelOpen => "AddPanelOpen",
        }
    }

    fn is_idle(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_no_selection() {
        assert_eq!(Selection::default(), Selection::NoSelection);
        assert!(Selection::default().is_idle());
    }

    #[test]
    fn queries_match_variant() {
        let id = FriendId::new();

        assert_eq!(Selection::FriendSelected(id).selected_friend(), Some(id));
        assert!(!Selection::FriendSelected(id).is_add_panel_open());
        assert_eq!(Selection::AddPanelOpen.selected_friend(), None);
        assert!(Selection::AddPanelOpen.is_add_panel_open());
        assert_eq!(Selection::NoSelection.selected_friend(), None);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Selection::NoSelection.name(), "NoSelection");
        assert_eq!(Selection::FriendSelected(FriendId::new()).name(), "FriendSelected");
        assert_eq!(Selection::AddPanelOpen.name(), "AddPanelOpen");
    }
}
