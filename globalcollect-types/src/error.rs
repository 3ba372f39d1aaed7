//! Error types for the gateway adapter.

pub use crate::ports::TransportError;

/// Domain-level errors (input validation failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unsupported card brand: {0}")]
    UnsupportedCardBrand(String),

    #[error("Expiry month must be 1-12, got {0}")]
    InvalidExpiryMonth(u8),
}

/// Gateway-level errors surfaced to callers.
///
/// Remote rejections are NOT here - the processor saying "no" is an
/// unsuccessful [`Outcome`](crate::domain::Outcome). These variants cover
/// everything that prevents or invalidates a round trip: preconditions
/// caught before the network, transport failures, and responses the
/// adapter cannot make sense of.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Merchant id is required")]
    MissingMerchantId,

    #[error("Missing required option: {0}")]
    MissingOption(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Malformed processor response: {0}")]
    MalformedResponse(String),
}
