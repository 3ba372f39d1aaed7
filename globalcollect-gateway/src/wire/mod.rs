//! The XML wire format.
//!
//! `request` serializes an ordered parameter tree into the processor's
//! fixed envelope; `response` parses the returned document into a
//! normalized [`Outcome`](globalcollect_types::Outcome).

mod request;
mod response;

pub use request::{build_request, PROTOCOL_VERSION};
pub use response::parse_response;
