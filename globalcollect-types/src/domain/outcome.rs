//! Normalized operation outcome.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::authorization::AuthorizationToken;

/// The normalized result of one dispatched operation.
///
/// Every call that reaches the processor yields an `Outcome`; a remote
/// rejection is an unsuccessful outcome, never an error. The token is
/// echoed back on success AND failure so a caller can still follow up
/// (e.g. void) against a rejected order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the processor reported `OK`.
    pub success: bool,
    /// "Success", or the processor's error messages joined with `; `.
    pub message: String,
    /// Result-row fields, element name to trimmed text. Empty when the
    /// response carried no row.
    pub fields: HashMap<String, String>,
    /// The authorization token that was in play for this call.
    pub authorization: AuthorizationToken,
    /// Whether the call went to the test endpoint.
    pub test: bool,
}

impl Outcome {
    /// Convenience accessor for a single result field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
