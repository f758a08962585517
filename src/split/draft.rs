//! Form state for a bill split with the selected friend.

use super::calculator::{friend_paid_amount, Payer};
use serde::{Deserialize, Serialize};

/// Values typed into the split form so far.
///
/// A fresh draft is created whenever a friend becomes selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitDraft {
    bill_total: Option<f64>,
    user_paid: Option<f64>,
    payer: Payer,
}

impl SplitDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill_total(&self) -> Option<f64> {
        self.bill_total
    }

    pub fn user_paid(&self) -> Option<f64> {
        self.user_paid
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Non-finite input is ignored.
    pub fn with_bill_total(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            bill_total: Some(value),
            ..self
        }
    }

    /// An amount above the current bill (an unset bill counts as zero) is
    /// dropped and the previous value stays.
    pub fn with_user_paid(self, value: f64) -> Self {
        if !value.is_finite() || value > self.bill_total.unwrap_or(0.0) {
            return self;
        }
        Self {
            user_paid: Some(value),
            ..self
        }
    }

    pub fn with_payer(self, payer: Payer) -> Self {
        Self { payer, ..self }
    }

    /// The friend's share, shown read-only next to the user's.
    ///
    /// `None` until a non-zero bill is entered; an unset user share counts
    /// as zero.
    pub fn friend_paid(&self) -> Option<f64> {
        self.bill_total
            .filter(|bill| *bill != 0.0)
            .map(|bill| friend_paid_amount(bill, self.user_paid.unwrap_or(0.0)))
    }
}
