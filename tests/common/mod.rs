#![allow(dead_code)]

use async_trait::async_trait;
use payauth::domain::account::Account;
use payauth::domain::ports::AccountStore;
use payauth::error::Result;
use payauth::infrastructure::in_memory::InMemoryAccountStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps an in-memory store and counts every call made through the port.
///
/// Clones share both the accounts and the counters.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryAccountStore,
    fetches: Arc<AtomicUsize>,
    updates: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            inner: InMemoryAccountStore::with_accounts(accounts),
            ..Default::default()
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.fetches() + self.updates()
    }

    /// Reads an account without touching the counters.
    pub async fn peek(&self, number: &str) -> Option<Account> {
        self.inner.fetch(number).await.unwrap()
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    async fn fetch(&self, number: &str) -> Result<Option<Account>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(number).await
    }

    async fn update(&self, account: Account) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(account).await
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.all_accounts().await
    }
}
