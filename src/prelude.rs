//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use amm_quoter::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the pair snapshot, error
//! types, and the factory address helpers so that consumers don't need
//! to import from individual submodules.

// Re-export domain types
pub use crate::domain::{ChainId, Decimals, Price, Token, TokenAddress, TokenAmount};

// Re-export the pair snapshot
pub use crate::pair::Pair;

// Re-export error types
pub use crate::error::{PairError, Result};

// Re-export factory address derivation
pub use crate::factory::{factory_address, pair_address, pair_token_address};
