//! Friend registry: the ordered list of friends and their balances.
//!
//! Every mutating operation returns a new registry and leaves the receiver
//! as it was. Friends keep their insertion position for the life of the
//! registry; nothing reorders or removes them.

mod friend;

pub use friend::{Friend, FriendId, Standing};

use crate::config::{ConfigError, SessionConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the starter registry from a validated config.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let friends: Vec<Friend> = config
            .friends
            .iter()
            .map(|seed| Friend {
                id: seed.id.unwrap_or_default(),
                name: seed.name.clone(),
                avatar_ref: seed.avatar_ref.clone(),
                balance: seed.balance,
            })
            .collect();

        info!("Seeded registry with {} friends", friends.len());
        Ok(Self { friends })
    }

    /// Append a new friend with a zero balance under a freshly generated id.
    ///
    /// The caller is expected to have rejected empty `name`/`avatar_ref`.
    pub fn add_friend(
        &self,
        name: impl Into<String>,
        avatar_ref: impl Into<String>,
    ) -> (Self, Friend) {
        self.add_friend_as(FriendId::new(), name, avatar_ref)
    }

    /// Like [`add_friend`](Self::add_friend) for an id the caller generated,
    /// so the id can be folded into the avatar reference first.
    pub(crate) fn add_friend_as(
        &self,
        id: FriendId,
        name: impl Into<String>,
        avatar_ref: impl Into<String>,
    ) -> (Self, Friend) {
        let friend = Friend::new(id, name, avatar_ref);
        let mut friends = self.friends.clone();
        friends.push(friend.clone());

        info!("Added friend: {} with ID: {}", friend.name, friend.id);
        (Self { friends }, friend)
    }

    /// Replace the matching friend with a copy whose balance moved by `delta`.
    ///
    /// An unknown id leaves the registry unchanged.
    pub fn adjust_balance(&self, friend_id: FriendId, delta: f64) -> Self {
        let Some(position) = self.position(friend_id) else {
            warn!("Balance adjustment for unknown friend: {}", friend_id);
            return self.clone();
        };

        let mut friends = self.friends.clone();
        friends[position] = friends[position].with_balance_adjusted(delta);
        debug!(
            "Adjusted balance of {} by {} to {}",
            friend_id, delta, friends[position].balance
        );
        Self { friends }
    }

    pub fn list_friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, friend_id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == friend_id)
    }

    pub fn contains(&self, friend_id: FriendId) -> bool {
        self.position(friend_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    fn position(&self, friend_id: FriendId) -> Option<usize> {
        self.friends.iter().position(|f| f.id == friend_id)
    }
}
