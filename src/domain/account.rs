use super::scheme::{AllowedPaymentSchemes, PaymentScheme};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed account balance.
///
/// Wraps `rust_decimal::Decimal`. There is no floor: debits may take the
/// balance below zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Subtracts `amount`, returning `None` if the result is out of range.
    pub fn checked_sub(self, amount: Decimal) -> Option<Self> {
        self.0.checked_sub(amount).map(Self)
    }

    /// True when the balance is greater than or equal to `amount`.
    pub fn covers(&self, amount: Decimal) -> bool {
        self.0 >= amount
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Live,
    InboundPaymentsOnly,
    Disabled,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Live => "live",
            Self::InboundPaymentsOnly => "inbound_payments_only",
            Self::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// State of a debtor account as held by an account store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Unique lookup key.
    pub number: String,
    pub balance: Balance,
    pub status: AccountStatus,
    /// Schemes this account may be debited through.
    pub allowed_schemes: AllowedPaymentSchemes,
}

impl Account {
    /// Creates a live account with a zero balance and no allowed schemes.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            balance: Balance::ZERO,
            status: AccountStatus::Live,
            allowed_schemes: AllowedPaymentSchemes::empty(),
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Balance::new(balance);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_schemes(mut self, schemes: impl Into<AllowedPaymentSchemes>) -> Self {
        self.allowed_schemes = schemes.into();
        self
    }

    pub fn allows(&self, scheme: PaymentScheme) -> bool {
        self.allowed_schemes.contains(scheme)
    }

    /// Debits the balance without any floor check.
    ///
    /// Fails with `BalanceOverflow`, leaving the balance untouched, when the
    /// result does not fit in a `Decimal`.
    pub fn debit(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| PaymentError::BalanceOverflow {
                account: self.number.clone(),
                amount,
            })?;
        Ok(())
    }
}
