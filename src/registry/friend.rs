//! Friend records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, unique friend identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(Uuid);

impl FriendId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FriendId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FriendId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Where the user stands with a friend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Standing {
    /// The user owes the friend this (positive) amount.
    YouOwe(f64),
    /// The friend owes the user this (positive) amount.
    OwesYou(f64),
    Even,
}

/// A friend and the running balance between them and the user.
///
/// A negative balance means the user owes the friend; positive means the
/// friend owes the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub avatar_ref: String,
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, avatar_ref: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_ref: avatar_ref.into(),
            balance: 0.0,
        }
    }

    /// Copy of this friend with `delta` added to the balance.
    pub fn with_balance_adjusted(&self, delta: f64) -> Self {
        Self {
            balance: self.balance + delta,
            ..self.clone()
        }
    }

    pub fn standing(&self) -> Standing {
        if self.balance < 0.0 {
            Standing::YouOwe(self.balance.abs())
        } else if self.balance > 0.0 {
            Standing::OwesYou(self.balance)
        } else {
            Standing::Even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(FriendId::new(), FriendId::new());
    }

    #[test]
    fn new_friend_is_settled() {
        let friend = Friend::new(FriendId::new(), "Lee", "https://i.pravatar.cc/48?u=499476");
        assert_eq!(friend.balance, 0.0);
        assert_eq!(friend.standing(), Standing::Even);
    }

    #[test]
    fn adjusted_copy_keeps_identity() {
        let friend = Friend::new(FriendId::new(), "Mike", "avatar");
        let adjusted = friend.with_balance_adjusted(20.0);

        assert_eq!(adjusted.id, friend.id);
        assert_eq!(adjusted.name, "Mike");
        assert_eq!(adjusted.balance, 20.0);
        assert_eq!(friend.balance, 0.0);
    }

    #[test]
    fn standing_follows_balance_sign() {
        let friend = Friend::new(FriendId::new(), "Drake", "avatar");
        assert_eq!(
            friend.with_balance_adjusted(-7.0).standing(),
            Standing::YouOwe(7.0)
        );
        assert_eq!(
            friend.with_balance_adjusted(20.0).standing(),
            Standing::OwesYou(20.0)
        );
    }

    #[test]
    fn id_serializes_as_plain_uuid() {
        let id = FriendId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: FriendId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
