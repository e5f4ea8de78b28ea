//! Deterministic derivation of pool identities.
//!
//! Given a chain's registered factory address and two token
//! identities, the pool address is a pure function of the
//! canonically-ordered pair. [`Pair`](crate::pair::Pair) uses the same
//! derivation to mint its liquidity-token identity.

mod pair_address;

pub use pair_address::{factory_address, pair_address, pair_token_address};
