//! Fundamental domain value types for the pair calculator.
//!
//! Chain-scoped token identities, arbitrary-precision currency amounts
//! and rational prices. All types use newtypes with validated
//! constructors to enforce invariants; none of them mutate in place.

mod chain_id;
mod decimals;
mod price;
mod token;
mod token_address;
mod token_amount;

pub use chain_id::ChainId;
pub use decimals::Decimals;
pub use price::Price;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_amount::TokenAmount;
