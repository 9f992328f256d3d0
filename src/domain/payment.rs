use super::scheme::PaymentScheme;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A request to debit `amount` from the debtor account through `scheme`.
///
/// The amount is taken as given: sign and currency are not checked.
/// A `None` scheme means the request named no recognized scheme.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    #[serde(rename = "debtor")]
    debtor_account_number: String,
    amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_scheme")]
    scheme: Option<PaymentScheme>,
}

fn deserialize_scheme<'de, D>(deserializer: D) -> std::result::Result<Option<PaymentScheme>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PaymentScheme::parse))
}

impl PaymentRequest {
    pub fn new(
        debtor_account_number: impl Into<String>,
        amount: Decimal,
        scheme: Option<PaymentScheme>,
    ) -> Self {
        Self {
            debtor_account_number: debtor_account_number.into(),
            amount,
            scheme,
        }
    }

    pub fn debtor_account_number(&self) -> &str {
        &self.debtor_account_number
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn scheme(&self) -> Option<PaymentScheme> {
        self.scheme
    }

    /// Checks the fields every request must carry.
    pub fn validate(&self) -> Result<()> {
        if self.debtor_account_number.trim().is_empty() {
            return Err(PaymentError::InvalidRequest(
                "debtor account number is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why an authorization was declined.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeclineReason {
    AccountNotFound,
    UnrecognizedScheme,
    SchemeNotAllowed,
    InsufficientFunds,
    AccountNotLive,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::AccountNotFound => "account_not_found",
            Self::UnrecognizedScheme => "unrecognized_scheme",
            Self::SchemeNotAllowed => "scheme_not_allowed",
            Self::InsufficientFunds => "insufficient_funds",
            Self::AccountNotLive => "account_not_live",
        };
        f.write_str(reason)
    }
}

/// Outcome of a single authorization.
///
/// `success` is the contract; `decline_reason` is set only on declines.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PaymentResult {
    pub success: bool,
    pub decline_reason: Option<DeclineReason>,
}

impl PaymentResult {
    pub fn authorized() -> Self {
        Self {
            success: true,
            decline_reason: None,
        }
    }

    pub fn declined(reason: DeclineReason) -> Self {
        Self {
            success: false,
            decline_reason: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn read_one(data: &str) -> PaymentRequest {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_bytes());
        let mut iter = reader.deserialize();
        iter.next()
            .unwrap()
            .expect("Failed to deserialize payment request")
    }

    #[test]
    fn test_request_deserialization_by_name() {
        let request = read_one("debtor, amount, scheme\nacc-1, 10.5, faster_payments");
        assert_eq!(request.debtor_account_number(), "acc-1");
        assert_eq!(request.amount(), dec!(10.5));
        assert_eq!(request.scheme(), Some(PaymentScheme::FasterPayments));
    }

    #[test]
    fn test_request_deserialization_by_code() {
        let request = read_one("debtor, amount, scheme\nacc-1, 1, 3");
        assert_eq!(request.scheme(), Some(PaymentScheme::Chaps));
    }

    #[test]
    fn test_request_unrecognized_scheme_is_none() {
        assert_eq!(read_one("debtor, amount, scheme\nacc-1, 1, 0").scheme(), None);
        assert_eq!(read_one("debtor, amount, scheme\nacc-1, 1, ").scheme(), None);
        assert_eq!(read_one("debtor, amount, scheme\nacc-1, 1, sepa").scheme(), None);
        assert_eq!(read_one("debtor, amount\nacc-1, 1").scheme(), None);
    }

    #[test]
    fn test_request_validation_requires_debtor() {
        let request = PaymentRequest::new("  ", dec!(1), Some(PaymentScheme::Bacs));
        assert!(matches!(
            request.validate(),
            Err(PaymentError::InvalidRequest(_))
        ));
        assert!(PaymentRequest::new("acc-1", dec!(1), None).validate().is_ok());
    }

    #[test]
    fn test_result_constructors() {
        assert!(PaymentResult::authorized().success);
        let declined = PaymentResult::declined(DeclineReason::InsufficientFunds);
        assert!(!declined.success);
        assert_eq!(declined.decline_reason, Some(DeclineReason::InsufficientFunds));
    }
}
