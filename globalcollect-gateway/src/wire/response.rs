//! Response envelope parsing.

use std::collections::HashMap;

use serde::Deserialize;

use globalcollect_types::{AuthorizationToken, GatewayError, Outcome};

const RESULT_OK: &str = "OK";
const SUCCESS_MESSAGE: &str = "Success";

// The processor echoes the request around the response:
// XML > REQUEST > RESPONSE > { RESULT, ROW?, ERROR* }.
// Unknown siblings (echoed META, PARAMS) are ignored.

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "REQUEST")]
    request: RequestEcho,
}

#[derive(Debug, Deserialize)]
struct RequestEcho {
    #[serde(rename = "RESPONSE")]
    response: ResponseNode,
}

#[derive(Debug, Deserialize)]
struct ResponseNode {
    #[serde(rename = "RESULT")]
    result: String,
    #[serde(rename = "ROW")]
    row: Option<HashMap<String, String>>,
    #[serde(rename = "ERROR", default)]
    errors: Vec<ErrorNode>,
}

#[derive(Debug, Deserialize)]
struct ErrorNode {
    #[serde(rename = "MESSAGE", default)]
    messages: Vec<String>,
}

/// Parses the raw response document into a normalized [`Outcome`].
///
/// A result of `OK` flattens the zero-or-one result row into a field map;
/// anything else aggregates every error message, trimmed, joined with
/// `; ` in document order. A document missing the expected structure is a
/// [`GatewayError::MalformedResponse`] - never a success, never a
/// remote-rejection outcome.
pub fn parse_response(
    body: &str,
    authorization: AuthorizationToken,
    test: bool,
) -> Result<Outcome, GatewayError> {
    let envelope: Envelope =
        quick_xml::de::from_str(body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    let response = envelope.request.response;

    if response.result == RESULT_OK {
        let fields = response
            .row
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name, value.trim().to_string()))
            .collect();
        Ok(Outcome {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            fields,
            authorization,
            test,
        })
    } else {
        let message = response
            .errors
            .iter()
            .flat_map(|error| error.messages.iter())
            .map(|message| message.trim())
            .collect::<Vec<_>>()
            .join("; ");
        Ok(Outcome {
            success: false,
            message,
            fields: HashMap::new(),
            authorization,
            test,
        })
    }
}
