//! Session configuration: seed friends and avatar defaults.

use crate::registry::FriendId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Avatar base used to pre-fill the add-friend form.
pub const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/48";

/// Errors that can occur when loading a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed friend at index {index} has an empty name")]
    EmptySeedName { index: usize },

    #[error("Seed friend at index {index} has an empty avatar reference")]
    EmptySeedAvatar { index: usize },

    #[error("Seed friend at index {index} has a balance that is not a finite number")]
    NonFiniteSeedBalance { index: usize },

    #[error("Seed friend id {0} appears more than once")]
    DuplicateFriendId(FriendId),
}

/// A friend present when the session starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedFriend {
    /// Fixed id; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<FriendId>,
    pub name: String,
    pub avatar_ref: String,
    #[serde(default)]
    pub balance: f64,
}

impl SeedFriend {
    fn new(name: &str, avatar_ref: &str, balance: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            avatar_ref: avatar_ref.to_string(),
            balance,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Value the add-friend avatar field starts with.
    pub default_avatar: String,

    /// Store new avatars as `"{avatar}?={id}"` so each friend gets a distinct image.
    pub personalize_avatars: bool,

    pub friends: Vec<SeedFriend>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_avatar: DEFAULT_AVATAR.to_string(),
            personalize_avatars: true,
            friends: vec![
                SeedFriend::new("Drake", "https://i.pravatar.cc/48?u=499571", -7.0),
                SeedFriend::new("Mike", "https://i.pravatar.cc/48?u=4E9571", 20.0),
                SeedFriend::new("Lee", "https://i.pravatar.cc/48?u=499476", 0.0),
            ],
        }
    }
}

impl SessionConfig {
    /// Configuration with no seed friends.
    pub fn empty() -> Self {
        Self {
            friends: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check seed friends for empty fields, non-finite balances and repeated ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, seed) in self.friends.iter().enumerate() {
            if seed.name.is_empty() {
                return Err(ConfigError::EmptySeedName { index });
            }
            if seed.avatar_ref.is_empty() {
                return Err(ConfigError::EmptySeedAvatar { index });
            }
            if !seed.balance.is_finite() {
                return Err(ConfigError::NonFiniteSeedBalance { index });
            }
            if let Some(id) = seed.id {
                if !seen.insert(id) {
                    return Err(ConfigError::DuplicateFriendId(id));
                }
            }
        }
        Ok(())
    }
}
