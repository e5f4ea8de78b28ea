//! Chain scope identifier.

use core::fmt;

/// Identifies the chain a token lives on.
///
/// Tokens are only comparable within the same chain scope; every
/// cross-chain operation in the crate is rejected at the ordering
/// predicate. All `u64` values are valid identifiers.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::ChainId;
///
/// let mainnet = ChainId::new(1);
/// assert_eq!(mainnet.get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Creates a new `ChainId` from a raw `u64` value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
