//! Monetary value in minor currency units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Currencies the adapter ships with.
///
/// CAD is the processor's historical default and is used as the fallback
/// default currency by the gateway configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Returns the ISO 4217 alphabetic code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "CAD" => Ok(Currency::CAD),
            other => Err(DomainError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Monetary amount in the smallest unit of its currency (cents etc.),
/// matching the processor's `money_format`.
///
/// The currency is optional: an amount without one resolves against the
/// gateway's configured default at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Option<Currency>,
}

impl Money {
    /// Creates a new Money value with an explicit currency.
    pub fn new(amount: i64, currency: Currency) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self {
            amount,
            currency: Some(currency),
        })
    }

    /// Creates a Money value that defers its currency to the gateway default.
    pub fn minor(amount: i64) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self {
            amount,
            currency: None,
        })
    }

    /// Returns the amount in smallest currency units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the embedded currency, if one was given.
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency {
            Some(currency) => write!(f, "{} {}", self.amount, currency),
            None => write!(f, "{}", self.amount),
        }
    }
}
