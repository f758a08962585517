//! Presence checks for form submissions.
//!
//! Checks run through Stillwater's `Validation` so a submission reports
//! every problem at once. The session turns failures into a silent no-op;
//! the collected reasons are only there for the caller to inspect.

use super::calculator::compute_delta;
use super::draft::SplitDraft;
use crate::registry::FriendId;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Why a submission was ignored.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Friend name is empty")]
    EmptyFriendName,

    #[error("Avatar reference is empty")]
    EmptyAvatarRef,

    #[error("Bill total is missing or zero")]
    MissingBillTotal,

    #[error("User's share is missing or zero")]
    MissingUserPaid,

    #[error("User's share ({paid}) exceeds the bill ({bill})")]
    PaidExceedsBill { paid: f64, bill: f64 },

    #[error("No friend is selected")]
    NoFriendSelected,

    #[error("Add-friend panel is closed")]
    AddPanelClosed,

    #[error("Unknown friend '{0}'")]
    UnknownFriend(FriendId),
}

pub type Checked = Validation<(), NonEmptyVec<Rejection>>;

fn require(ok: bool, rejection: Rejection) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(rejection)
    }
}

/// Both add-friend fields must be non-empty.
pub fn validate_add_friend(name: &str, avatar_ref: &str) -> Checked {
    let checks = vec![
        require(!name.is_empty(), Rejection::EmptyFriendName),
        require(!avatar_ref.is_empty(), Rejection::EmptyAvatarRef),
    ];
    Validation::all_vec(checks).map(|_| ())
}

/// Bill and user share must both be set and positive, and the share must
/// still fit in the bill (the bill may have been lowered after the share
/// was typed).
pub fn validate_split(draft: &SplitDraft) -> Checked {
    let bill = draft.bill_total().unwrap_or(0.0);
    let paid = draft.user_paid().unwrap_or(0.0);

    let checks = vec![
        require(bill > 0.0, Rejection::MissingBillTotal),
        require(paid > 0.0, Rejection::MissingUserPaid),
        require(paid <= bill, Rejection::PaidExceedsBill { paid, bill }),
    ];
    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a validation into the list of reasons it failed with.
pub fn rejections(checked: Checked) -> Result<(), Vec<Rejection>> {
    match checked {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Validate the draft and compute the balance delta it settles to.
pub fn settle(draft: &SplitDraft) -> Result<f64, Vec<Rejection>> {
    rejections(validate_split(draft))?;
    Ok(compute_delta(
        draft.bill_total().unwrap_or(0.0),
        draft.user_paid().unwrap_or(0.0),
        draft.payer(),
    ))
}
