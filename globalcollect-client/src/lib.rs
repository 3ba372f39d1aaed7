//! # GlobalCollect Client
//!
//! A `reqwest`-backed implementation of the gateway's [`Transport`] port.
//!
//! Retries and backoff are deliberately NOT implemented here: the gateway
//! core treats every send as a single atomic round trip, and resubmission
//! semantics belong to the caller.

use globalcollect_types::{Transport, TransportError};

/// HTTP transport posting request documents to the processor.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Creates a transport over a preconfigured client (timeouts, TLS
    /// settings, proxies).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let mut request = self.http.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connect(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(code = status.as_u16(), url, "processor returned HTTP error");
            return Err(TransportError::Status {
                code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
