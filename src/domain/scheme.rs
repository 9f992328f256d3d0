use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment rail a debit can be requested on.
///
/// The numeric codes are stable and used by the request reader; `0` is
/// reserved for "no recognized scheme" and has no variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    Bacs = 1,
    FasterPayments = 2,
    Chaps = 3,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [
        PaymentScheme::Bacs,
        PaymentScheme::FasterPayments,
        PaymentScheme::Chaps,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parses a scheme by name or numeric code.
    ///
    /// Returns `None` for blank input, `0` and anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(code) = value.parse::<u8>() {
            return Self::try_from(code).ok();
        }
        match value.to_ascii_lowercase().as_str() {
            "bacs" => Some(Self::Bacs),
            "faster_payments" | "fasterpayments" => Some(Self::FasterPayments),
            "chaps" => Some(Self::Chaps),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self.code() - 1)
    }
}

impl TryFrom<u8> for PaymentScheme {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Bacs),
            2 => Ok(Self::FasterPayments),
            3 => Ok(Self::Chaps),
            other => Err(other),
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bacs => "bacs",
            Self::FasterPayments => "faster_payments",
            Self::Chaps => "chaps",
        };
        f.write_str(name)
    }
}

/// Set of schemes an account may be debited through, stored as a bitmask.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(transparent)]
pub struct AllowedPaymentSchemes(u8);

impl AllowedPaymentSchemes {
    const MASK: u8 = 0b111;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Builds a set from raw bits, dropping bits that map to no scheme.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, scheme: PaymentScheme) -> bool {
        self.0 & scheme.bit() != 0
    }

    pub fn insert(&mut self, scheme: PaymentScheme) {
        self.0 |= scheme.bit();
    }

    pub fn remove(&mut self, scheme: PaymentScheme) {
        self.0 &= !scheme.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = PaymentScheme> {
        PaymentScheme::ALL
            .into_iter()
            .filter(move |scheme| self.contains(*scheme))
    }
}

impl From<PaymentScheme> for AllowedPaymentSchemes {
    fn from(scheme: PaymentScheme) -> Self {
        Self(scheme.bit())
    }
}

impl FromIterator<PaymentScheme> for AllowedPaymentSchemes {
    fn from_iter<I: IntoIterator<Item = PaymentScheme>>(iter: I) -> Self {
        let mut set = Self::empty();
        for scheme in iter {
            set.insert(scheme);
        }
        set
    }
}

impl fmt::Display for AllowedPaymentSchemes {
    /// Formats as a `|`-separated list of scheme names, empty for no schemes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|s| s.to_string()).collect();
        f.write_str(&names.join("|"))
    }
}
