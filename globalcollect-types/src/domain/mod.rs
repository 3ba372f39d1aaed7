//! Pure domain types for the gateway adapter.

mod authorization;
mod card;
mod money;
mod order;
mod outcome;
mod params;

pub use authorization::AuthorizationToken;
pub use card::{CardBrand, CardDetails};
pub use money::{Currency, Money};
pub use order::OrderId;
pub use outcome::Outcome;
pub use params::{ParamTree, ParamValue};
