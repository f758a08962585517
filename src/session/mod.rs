//! The session: one value owning the registry, the selection and both form
//! drafts.
//!
//! Events go in through [`Session::dispatch`], which returns the next
//! session and an [`Outcome`]. The receiver is never modified, so callers
//! can compare the two values to detect changes.

mod add_friend;
mod event;

pub use add_friend::AddFriendDraft;
pub use event::{Event, Outcome};

use crate::config::{ConfigError, SessionConfig};
use crate::registry::{Friend, FriendId, FriendRegistry};
use crate::selection::SelectionController;
use crate::split::{rejections, settle, validate_add_friend, Payer, Rejection, SplitDraft};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    config: SessionConfig,
    registry: FriendRegistry,
    selection: SelectionController,
    split: Option<SplitDraft>,
    add_friend: AddFriendDraft,
}

impl Session {
    /// Start a session seeded from `config`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let registry = FriendRegistry::from_config(&config)?;
        let add_friend = AddFriendDraft::new(&config.default_avatar);
        Ok(Self {
            config,
            registry,
            selection: SelectionController::new(),
            split: None,
            add_friend,
        })
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn friends(&self) -> &[Friend] {
        self.registry.list_friends()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection
            .selected_friend()
            .and_then(|id| self.registry.get(id))
    }

    /// The split form; present exactly while a friend is selected.
    pub fn split_draft(&self) -> Option<&SplitDraft> {
        self.split.as_ref()
    }

    /// The payer picked in the split form, while one is showing.
    pub fn payer(&self) -> Option<Payer> {
        self.split.map(|draft| draft.payer())
    }

    pub fn add_friend_draft(&self) -> &AddFriendDraft {
        &self.add_friend
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply one user event.
    pub fn dispatch(&self, event: Event) -> (Self, Outcome) {
        let name = event.name();
        debug!("Dispatching {}", name);

        let result = match event {
            Event::ToggleAddFriendPanel => {
                Ok(self.with_selection(self.selection.toggle_add_friend_panel()))
            }
            Event::OpenAddFriendPanel => {
                Ok(self.with_selection(self.selection.open_add_friend_panel()))
            }
            Event::EditFriendName(value) => self.edit_add_friend(|draft| draft.name = value),
            Event::EditAvatarRef(avatar_ref) => {
                self.edit_add_friend(|draft| draft.avatar_ref = avatar_ref)
            }
            Event::SubmitAddFriend => self.submit_add_friend(),
            Event::SelectFriend(friend_id) => self.select_friend(friend_id),
            Event::EditBillTotal(value) => self.edit_split(|draft| draft.with_bill_total(value)),
            Event::EditUserPaid(value) => self.edit_split(|draft| draft.with_user_paid(value)),
            Event::ChoosePayer(payer) => self.edit_split(|draft| draft.with_payer(payer)),
            Event::SubmitSplit => self.submit_split(),
        };

        match result {
            Ok(next) if next == *self => (next, Outcome::Unchanged),
            Ok(next) => (next, Outcome::Applied),
            Err(reasons) => {
                debug!("Ignored {}: {:?}", name, reasons);
                (self.clone(), Outcome::Rejected(reasons))
            }
        }
    }

    /// Dispatch a sequence of events, returning the final session and the
    /// outcome of each.
    pub fn dispatch_all<I>(&self, events: I) -> (Self, Vec<Outcome>)
    where
        I: IntoIterator<Item = Event>,
    {
        let mut session = self.clone();
        let mut outcomes = Vec::new();
        for event in events {
            let (next, outcome) = session.dispatch(event);
            session = next;
            outcomes.push(outcome);
        }
        (session, outcomes)
    }

    fn submit_add_friend(&self) -> Result<Self, Vec<Rejection>> {
        if !self.selection.is_add_panel_open() {
            return Err(vec![Rejection::AddPanelClosed]);
        }
        rejections(validate_add_friend(
            &self.add_friend.name,
            &self.add_friend.avatar_ref,
        ))?;

        let id = FriendId::new();
        let avatar_ref = self
            .add_friend
            .avatar_for(id, self.config.personalize_avatars);
        let (registry, _) = self
            .registry
            .add_friend_as(id, self.add_friend.name.clone(), avatar_ref);

        Ok(Self {
            registry,
            ..self.with_selection(self.selection.close_add_friend_panel())
        })
    }

    fn select_friend(&self, friend_id: FriendId) -> Result<Self, Vec<Rejection>> {
        if !self.registry.contains(friend_id) {
            return Err(vec![Rejection::UnknownFriend(friend_id)]);
        }
        Ok(self.with_selection(self.selection.select_friend(friend_id)))
    }

    fn submit_split(&self) -> Result<Self, Vec<Rejection>> {
        let (Some(friend_id), Some(draft)) = (self.selection.selected_friend(), self.split) else {
            return Err(vec![Rejection::NoFriendSelected]);
        };
        let delta = settle(&draft)?;

        let registry = self.registry.adjust_balance(friend_id, delta);
        if let Some(friend) = registry.get(friend_id) {
            info!(
                "Split settled with {}: delta {}, balance now {}",
                friend.name, delta, friend.balance
            );
        }

        Ok(Self {
            registry,
            ..self.with_selection(self.selection.clear_selection())
        })
    }

    fn edit_add_friend<F>(&self, edit: F) -> Result<Self, Vec<Rejection>>
    where
        F: FnOnce(&mut AddFriendDraft),
    {
        if !self.selection.is_add_panel_open() {
            return Err(vec![Rejection::AddPanelClosed]);
        }
        let mut add_friend = self.add_friend.clone();
        edit(&mut add_friend);
        Ok(Self {
            add_friend,
            ..self.clone()
        })
    }

    fn edit_split<F>(&self, edit: F) -> Result<Self, Vec<Rejection>>
    where
        F: FnOnce(SplitDraft) -> SplitDraft,
    {
        let draft = self.split.ok_or_else(|| vec![Rejection::NoFriendSelected])?;
        Ok(Self {
            split: Some(edit(draft)),
            ..self.clone()
        })
    }

    /// Move to `selection`, resetting whichever drafts its change invalidates:
    /// a new selected friend gets a fresh split draft, and a closed panel
    /// forgets what was typed into it.
    fn with_selection(&self, selection: SelectionController) -> Self {
        let split = match (self.selection.selected_friend(), selection.selected_friend()) {
            (Some(before), Some(after)) if before == after => self.split,
            (_, Some(_)) => Some(SplitDraft::new()),
            (_, None) => None,
        };
        let add_friend = if selection.is_add_panel_open() {
            self.add_friend.clone()
        } else {
            AddFriendDraft::new(&self.config.default_avatar)
        };

        Self {
            selection,
            split,
            add_friend,
            ..self.clone()
        }
    }
}
