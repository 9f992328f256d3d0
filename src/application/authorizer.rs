use crate::domain::eligibility;
use crate::domain::payment::{DeclineReason, PaymentRequest, PaymentResult};
use crate::domain::ports::{AccountStore, AccountStoreBox};
use crate::error::Result;
use tracing::{debug, info, warn};

/// Behaviour switches for [`PaymentAuthorizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizerConfig {
    /// Write the (unchanged) account back to the store when a payment is
    /// declined. Unknown accounts are never written.
    pub update_on_decline: bool,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            update_on_decline: true,
        }
    }
}

/// Decides whether a debit may go through and applies it.
///
/// The authorizer holds no account state of its own. Each call issues one
/// `fetch` and at most one `update` against the injected store, with no
/// locking in between: two concurrent debits on the same account can both
/// read the same balance. Stores that need stronger guarantees must provide
/// them behind the port.
pub struct PaymentAuthorizer {
    store: AccountStoreBox,
    config: AuthorizerConfig,
}

impl PaymentAuthorizer {
    /// Creates an authorizer over `store` with the default configuration.
    pub fn new(store: AccountStoreBox) -> Self {
        Self::with_config(store, AuthorizerConfig::default())
    }

    pub fn with_config(store: AccountStoreBox, config: AuthorizerConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    /// Authorizes a single debit.
    ///
    /// A request with a blank or whitespace-only debtor account number fails
    /// with `PaymentError::InvalidRequest` before the store is touched. Every
    /// business outcome, including an unknown debtor account, is an `Ok`
    /// result. A debit whose result does not fit in a `Decimal` fails with
    /// `PaymentError::BalanceOverflow` and nothing is written. Store errors
    /// propagate unchanged.
    #[tracing::instrument(
        skip(self, request),
        fields(
            debtor = %request.debtor_account_number(),
            scheme = ?request.scheme(),
            amount = %request.amount()
        )
    )]
    pub async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        request.validate()?;

        let Some(mut account) = self.store.fetch(request.debtor_account_number()).await? else {
            warn!(reason = %DeclineReason::AccountNotFound, "payment declined");
            return Ok(PaymentResult::declined(DeclineReason::AccountNotFound));
        };

        match eligibility::check(&account, request) {
            Ok(()) => {
                account.debit(request.amount())?;
                let balance = account.balance;
                self.store.update(account).await?;
                info!(%balance, "payment authorized");
                Ok(PaymentResult::authorized())
            }
            Err(reason) => {
                warn!(%reason, "payment declined");
                if self.config.update_on_decline {
                    self.store.update(account).await?;
                } else {
                    debug!("skipping account update on decline");
                }
                Ok(PaymentResult::declined(reason))
            }
        }
    }
}
