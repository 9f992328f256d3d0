use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing account states.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account store backed by RocksDB.
///
/// Accounts are stored as JSON in the `accounts` column family, keyed by the
/// account number's UTF-8 bytes.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbAccountStore {
    db: Arc<DB>,
}

impl RocksDbAccountStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the `accounts` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_ACCOUNTS).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(
                "Accounts column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<Account> {
    serde_json::from_slice(bytes).map_err(|e| {
        PaymentError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

#[async_trait]
impl AccountStore for RocksDbAccountStore {
    async fn fetch(&self, number: &str) -> Result<Option<Account>> {
        let cf = self.accounts_cf()?;
        match self.db.get_cf(cf, number.as_bytes())? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    async fn update(&self, account: Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(&account).map_err(|e| {
            PaymentError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(cf, account.number.as_bytes(), value)?;
        Ok(())
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let cf = self.accounts_cf()?;
        let mut accounts = Vec::new();

        // Keys iterate in byte order, which matches account number order.
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            accounts.push(decode(&value)?);
        }

        Ok(accounts)
    }
}
