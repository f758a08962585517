//! User events and what came of them.

use crate::registry::FriendId;
use crate::split::{Payer, Rejection};
use serde::{Deserialize, Serialize};

/// A discrete user action forwarded by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The "Add friend" / "Close" button.
    ToggleAddFriendPanel,
    OpenAddFriendPanel,
    EditFriendName(String),
    EditAvatarRef(String),
    SubmitAddFriend,
    /// A friend row's "Select" / "Close" button.
    SelectFriend(FriendId),
    EditBillTotal(f64),
    EditUserPaid(f64),
    ChoosePayer(Payer),
    SubmitSplit,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleAddFriendPanel => "toggle_add_friend_panel",
            Self::OpenAddFriendPanel => "open_add_friend_panel",
            Self::EditFriendName(_) => "edit_friend_name",
            Self::EditAvatarRef(_) => "edit_avatar_ref",
            Self::SubmitAddFriend => "submit_add_friend",
            Self::SelectFriend(_) => "select_friend",
            Self::EditBillTotal(_) => "edit_bill_total",
            Self::EditUserPaid(_) => "edit_user_paid",
            Self::ChoosePayer(_) => "choose_payer",
            Self::SubmitSplit => "submit_split",
        }
    }
}

/// Result of dispatching one event.
///
/// Rejections are silent to the user: the session comes back exactly as it
/// was, and the reasons are only reported here.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Applied,
    /// The event was valid but had nothing to change (e.g. a clamped keystroke).
    Unchanged,
    /// The event does not apply in the current state, or failed validation.
    Rejected(Vec<Rejection>),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
