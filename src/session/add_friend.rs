use crate::registry::FriendId;
use serde::{Deserialize, Serialize};

/// Contents of the add-friend form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddFriendDraft {
    pub name: String,
    pub avatar_ref: String,
}

impl AddFriendDraft {
    /// Empty name, avatar pre-filled with `default_avatar`.
    pub fn new(default_avatar: &str) -> Self {
        Self {
            name: String::new(),
            avatar_ref: default_avatar.to_string(),
        }
    }

    /// Avatar reference to store for a friend created under `id`.
    pub(crate) fn avatar_for(&self, id: FriendId, personalize: bool) -> String {
        if personalize {
            format!("{}?={}", self.avatar_ref, id)
        } else {
            self.avatar_ref.clone()
        }
    }
}
