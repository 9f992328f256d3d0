use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account store.
///
/// Uses `Arc<RwLock<HashMap<String, Account>>>`, so clones share the same
/// accounts. Ideal for testing or runs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with `accounts`.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.number.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn fetch(&self, number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(number).cloned())
    }

    async fn update(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.number.clone(), account);
        Ok(())
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(all)
    }
}
