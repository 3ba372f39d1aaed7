//! Option carriers for the operation entry points.

use serde::{Deserialize, Serialize};

use crate::domain::Currency;

/// Per-operation options.
///
/// `authorize`/`purchase` require `order_id` and `country`; the others
/// accept whatever is set and ignore the rest. A missing required option
/// is a precondition failure raised before any network call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentOptions {
    /// Externally supplied order identifier, normalized by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Billing country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Overrides the money's currency and the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl PaymentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }
}
