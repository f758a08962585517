//! Split calculator and the form state that feeds it.
//!
//! - `calculator`: the pure delta computation
//! - `draft`: the split form, including the silent clamp on the user's share
//! - `validation`: accumulating presence checks for submissions

mod calculator;
mod draft;
mod validation;

pub use calculator::{compute_delta, friend_paid_amount, Payer};
pub use draft::SplitDraft;
pub use validation::{
    rejections, settle, validate_add_friend, validate_split, Checked, Rejection,
};
