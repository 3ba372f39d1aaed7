//! # GlobalCollect Types
//!
//! Domain types and port traits for the GlobalCollect WebCollect gateway
//! adapter. This crate has ZERO external IO dependencies - only data
//! structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, CardDetails, OrderId, ParamTree)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Option carriers for the operation entry points
//! - `error/` - Domain and gateway error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AuthorizationToken, CardBrand, CardDetails, Currency, Money, OrderId, Outcome, ParamTree,
    ParamValue,
};
pub use dto::PaymentOptions;
pub use error::{DomainError, GatewayError};
pub use ports::{Transport, TransportError};
