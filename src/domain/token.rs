//! Token identity type.

use super::{ChainId, Decimals, TokenAddress};
use crate::error::{PairError, Result};

/// The canonical identity of a token on a given chain.
///
/// Combines a [`ChainId`], a [`TokenAddress`] and the token's
/// [`Decimals`]. Two tokens are considered equal only if all three
/// components match.
///
/// The deterministic total order over tokens of the same chain is the
/// lexicographic order of their addresses, exposed through
/// [`sorts_before`](Token::sorts_before). It is the single source of
/// truth for canonical pair ordering.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::{ChainId, Decimals, Token, TokenAddress};
///
/// let usdc = Token::new(ChainId::new(1), TokenAddress::from_bytes([1u8; 32]), Decimals::new(6));
/// let weth = Token::new(ChainId::new(1), TokenAddress::from_bytes([2u8; 32]), Decimals::new(18));
///
/// assert_eq!(usdc.sorts_before(&weth), Ok(true));
/// assert_eq!(weth.sorts_before(&usdc), Ok(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    chain_id: ChainId,
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    ///
    /// Construction is infallible because every component is already
    /// valid at its own construction site.
    #[must_use]
    pub const fn new(chain_id: ChainId, address: TokenAddress, decimals: Decimals) -> Self {
        Self {
            chain_id,
            address,
            decimals,
        }
    }

    /// Returns the chain this token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if this token precedes `other` in the canonical
    /// total order (lexicographic address order within one chain).
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidPair`] if the tokens live on
    /// different chains (incomparable) or share the same address
    /// (identical tokens have no order).
    pub fn sorts_before(&self, other: &Self) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(PairError::InvalidPair(
                "tokens on different chains cannot be ordered",
            ));
        }
        if self.address == other.address {
            return Err(PairError::InvalidPair(
                "identical token addresses cannot be ordered",
            ));
        }
        Ok(self.address < other.address)
    }
}
