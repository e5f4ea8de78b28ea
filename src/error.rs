//! Unified error types for the pair calculator.
//!
//! All fallible operations across the crate return [`PairError`] as their
//! error type. The set is closed on purpose: every failure an on-chain
//! pair contract can signal maps to exactly one variant here, so callers
//! can match exhaustively instead of parsing messages.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, PairError>;

/// The closed set of failures a pair operation can produce.
///
/// Nothing is retried internally and no partial state is ever left
/// behind: every operation is a pure function, so an `Err` simply means
/// no new value was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairError {
    /// The reserves cannot support the requested operation: a reserve is
    /// zero, or the requested output meets or exceeds the available
    /// output reserve.
    #[error("insufficient reserves for the requested operation")]
    InsufficientReserves,

    /// The computed result is not strictly positive, or a computed
    /// output would drain the output reserve.
    #[error("input amount is insufficient to produce a positive result")]
    InsufficientInputAmount,

    /// A currency argument does not belong where it was used: a token
    /// outside the pair, a supply or liquidity amount not denominated in
    /// the pair's liquidity token, or mismatched cross-currency
    /// arithmetic.
    #[error("token mismatch: {0}")]
    TokenMismatch(&'static str),

    /// The fee-growth adjustment was requested (`fee_on = true`) without
    /// a prior invariant snapshot.
    #[error("kLast is required when the protocol fee is on")]
    MissingKLast,

    /// A construction or ordering precondition was violated: identical
    /// tokens, tokens on different chains, or a chain with no registered
    /// factory.
    #[error("invalid pair: {0}")]
    InvalidPair(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_reserves() {
        let msg = format!("{}", PairError::InsufficientReserves);
        assert!(msg.contains("insufficient reserves"));
    }

    #[test]
    fn display_token_mismatch_carries_context() {
        let msg = format!("{}", PairError::TokenMismatch("input token"));
        assert!(msg.contains("input token"));
    }

    #[test]
    fn display_missing_k_last() {
        let msg = format!("{}", PairError::MissingKLast);
        assert!(msg.contains("kLast"));
    }

    #[test]
    fn equality() {
        assert_eq!(
            PairError::InsufficientReserves,
            PairError::InsufficientReserves
        );
        assert_ne!(
            PairError::InsufficientReserves,
            PairError::InsufficientInputAmount
        );
    }

    #[test]
    fn errors_are_copy() {
        let e = PairError::MissingKLast;
        let f = e;
        assert_eq!(e, f);
    }
}
