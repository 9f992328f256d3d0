//! Scheme eligibility rules.
//!
//! Every function here is pure: it reads the account and request and never
//! touches a store.

use super::account::{Account, AccountStatus};
use super::payment::{DeclineReason, PaymentRequest};
use super::scheme::PaymentScheme;
use rust_decimal::Decimal;

pub fn allows_bacs(account: &Account) -> bool {
    account.allows(PaymentScheme::Bacs)
}

/// Faster Payments needs the scheme and a balance of at least `amount`.
pub fn allows_faster_payments(account: &Account, amount: Decimal) -> bool {
    account.allows(PaymentScheme::FasterPayments) && account.balance.covers(amount)
}

/// Chaps needs the scheme and a `Live` account.
pub fn allows_chaps(account: &Account) -> bool {
    account.allows(PaymentScheme::Chaps) && account.status == AccountStatus::Live
}

/// Runs the one predicate selected by the request's scheme.
///
/// Returns the decline reason when the account is not eligible.
pub fn check(account: &Account, request: &PaymentRequest) -> Result<(), DeclineReason> {
    let Some(scheme) = request.scheme() else {
        return Err(DeclineReason::UnrecognizedScheme);
    };

    let eligible = match scheme {
        PaymentScheme::Bacs => allows_bacs(account),
        PaymentScheme::FasterPayments => allows_faster_payments(account, request.amount()),
        PaymentScheme::Chaps => allows_chaps(account),
    };

    if eligible {
        Ok(())
    } else if !account.allows(scheme) {
        Err(DeclineReason::SchemeNotAllowed)
    } else if scheme == PaymentScheme::FasterPayments {
        Err(DeclineReason::InsufficientFunds)
    } else {
        Err(DeclineReason::AccountNotLive)
    }
}
