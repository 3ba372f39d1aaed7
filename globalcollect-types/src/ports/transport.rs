//! Outbound transport port.
//!
//! This trait defines the interface for delivering a request document to
//! the processor. Implementations can be HTTP clients, test doubles, etc.
//! Retries, timeouts and TLS live behind this port; the gateway core
//! performs exactly one `send` per operation and propagates failures
//! unchanged.

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected HTTP status: {code}")]
    Status { code: u16 },

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Port trait for the outbound transport.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Posts `body` to `url` with the given headers and returns the raw
    /// response body.
    async fn send(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError>;
}
