use crate::domain::account::{Account, AccountStatus, Balance};
use crate::domain::scheme::{AllowedPaymentSchemes, PaymentScheme};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct AccountRecord {
    account: String,
    balance: Decimal,
    status: AccountStatus,
    #[serde(default)]
    schemes: Option<String>,
}

impl AccountRecord {
    fn into_account(self) -> Result<Account> {
        let mut allowed = AllowedPaymentSchemes::empty();
        for name in self.schemes.iter().flat_map(|s| s.split('|')) {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let scheme = PaymentScheme::parse(name).ok_or_else(|| {
                PaymentError::ValidationError(format!(
                    "unknown scheme '{}' for account {}",
                    name, self.account
                ))
            })?;
            allowed.insert(scheme);
        }

        Ok(Account {
            number: self.account,
            balance: Balance::new(self.balance),
            status: self.status,
            allowed_schemes: allowed,
        })
    }
}

/// Reads seed accounts from a CSV source.
///
/// Expected header: `account, balance, status, schemes`, where `schemes` is
/// a `|`-separated list of scheme names or codes.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts accounts.
    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize::<AccountRecord>()
            .map(|result| {
                result
                    .map_err(PaymentError::from)
                    .and_then(AccountRecord::into_account)
            })
    }
}
