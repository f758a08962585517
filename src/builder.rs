//! Fluent construction of a [`Session`].

use crate::config::{ConfigError, SeedFriend, SessionConfig};
use crate::registry::FriendId;
use crate::session::Session;

/// Builder for sessions with a fluent API.
///
/// Starts from an empty seed list; use [`SessionConfig::default`] with
/// [`Session::new`] for the starter set.
///
/// # Example
///
/// ```rust
/// use splitbill::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .friend("Drake", "https://i.pravatar.cc/48?u=499571", -7.0)
///     .friend("Lee", "https://i.pravatar.cc/48?u=499476", 0.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.friends().len(), 2);
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::empty(),
        }
    }

    /// Start from an existing configuration, e.g. one read from JSON.
    pub fn from_config(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Add a seed friend with a generated id.
    pub fn friend(mut self, name: &str, avatar_ref: &str, balance: f64) -> Self {
        self.config.friends.push(SeedFriend {
            id: None,
            name: name.to_string(),
            avatar_ref: avatar_ref.to_string(),
            balance,
        });
        self
    }

    /// Add a seed friend under a fixed id.
    pub fn friend_with_id(mut self, id: FriendId, name: &str, avatar_ref: &str, balance: f64) -> Self {
        self.config.friends.push(SeedFriend {
            id: Some(id),
            name: name.to_string(),
            avatar_ref: avatar_ref.to_string(),
            balance,
        });
        self
    }

    pub fn default_avatar(mut self, avatar: &str) -> Self {
        self.config.default_avatar = avatar.to_string();
        self
    }

    pub fn personalize_avatars(mut self, enabled: bool) -> Self {
        self.config.personalize_avatars = enabled;
        self
    }

    /// Validate the seed and start the session.
    pub fn build(self) -> Result<Session, ConfigError> {
        Session::new(self.config)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
