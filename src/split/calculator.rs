//! Pure settlement arithmetic.

use serde::{Deserialize, Serialize};

/// Who paid the bill up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

/// The friend's share of the bill.
pub fn friend_paid_amount(bill_total: f64, user_paid: f64) -> f64 {
    bill_total - user_paid
}

/// Signed change to the selected friend's balance.
///
/// When the user paid, the friend owes their own share (`+friend_paid`).
/// When the friend paid, the user owes their share (`-user_paid`).
///
/// Callers must ensure `bill_total > 0` and `0 <= user_paid <= bill_total`.
pub fn compute_delta(bill_total: f64, user_paid: f64, payer: Payer) -> f64 {
    match payer {
        Payer::User => friend_paid_amount(bill_total, user_paid),
        Payer::Friend => -user_paid,
    }
}
