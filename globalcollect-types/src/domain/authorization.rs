//! The composite authorization token.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::order::OrderId;

/// Opaque carrier of the state a follow-up operation needs: the order id
/// and the payment product, joined by a `|`.
///
/// This is the adapter's own encoding, not a processor value. It is the
/// ONLY thing that crosses from authorize to capture/void/refund - no
/// other state is kept between calls.
///
/// Decoding never fails: an empty or delimiter-free token decays to empty
/// fields, which are forwarded on the wire as-is. The processor is the
/// authority on whether a token still refers to anything; the adapter
/// deliberately does no validation beyond splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// Encodes the order id and payment product into a token.
    pub fn encode(order_id: &OrderId, payment_product: u32) -> Self {
        Self(format!("{}|{}", order_id, payment_product))
    }

    /// Splits the token on the first `|` into (order id, payment product).
    pub fn decode(&self) -> (&str, &str) {
        match self.0.split_once('|') {
            Some((order_id, payment_product)) => (order_id, payment_product),
            None => (self.0.as_str(), ""),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthorizationToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AuthorizationToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
