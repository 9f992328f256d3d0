use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;

/// Port to wherever account state lives.
///
/// The authorizer only relies on `fetch` and `update`. `update` replaces the
/// full stored state for the account's number and also serves as an upsert
/// when seeding.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Returns the account for `number`, or `None` if there is none.
    async fn fetch(&self, number: &str) -> Result<Option<Account>>;
    async fn update(&self, account: Account) -> Result<()>;
    /// Lists every stored account. Used for reporting, never by the authorizer.
    async fn all_accounts(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
