//! Splitbill: a pure functional bill-splitting session core
//!
//! Splitbill keeps a list of friends with running balances, lets the user
//! add friends, select one friend at a time, and settle a shared bill
//! against the selected friend. It follows the "pure core, imperative
//! shell" split: every component is an immutable value, and the
//! [`Session`] routes user events through them, returning a new value each
//! time.
//!
//! # Core Concepts
//!
//! - **Registry**: ordered friends and balances, replace-on-write
//! - **Selection**: `NoSelection | FriendSelected(id) | AddPanelOpen`, so a
//!   selected friend and an open add-friend panel can never coexist
//! - **Split**: the delta computation, the split form and its silent clamp
//! - **Session**: the event loop shell with silent rejection of bad input
//!
//! # Example
//!
//! ```rust
//! use splitbill::{Event, Outcome, Payer, Session, SessionConfig};
//!
//! let session = Session::new(SessionConfig::default()).unwrap();
//! let lee = session.friends()[2].id;
//!
//! let (session, outcomes) = session.dispatch_all([
//!     Event::SelectFriend(lee),
//!     Event::EditBillTotal(100.0),
//!     Event::EditUserPaid(40.0),
//!     Event::ChoosePayer(Payer::User),
//!     Event::SubmitSplit,
//! ]);
//!
//! assert_eq!(outcomes.last(), Some(&Outcome::Applied));
//! assert_eq!(session.registry().get(lee).map(|f| f.balance), Some(60.0));
//! assert!(session.selection().selected_friend().is_none());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod registry;
pub mod selection;
pub mod session;
pub mod split;

// Re-export commonly used types
pub use builder::SessionBuilder;
pub use config::{ConfigError, SessionConfig};
pub use registry::{Friend, FriendId, FriendRegistry, Standing};
pub use selection::{Selection, SelectionController};
pub use session::{Event, Outcome, Session};
pub use split::{compute_delta, Payer, Rejection, SplitDraft};
