//! Currency-tagged fixed-point quantity.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::Token;
use crate::error::{PairError, Result};

/// An immutable quantity of one specific token.
///
/// The quotient is an arbitrary-precision integer expressed in the
/// token's own smallest unit (value × 10^decimals). Cross-currency
/// arithmetic is forbidden: every binary operation checks that both
/// sides carry the same [`Token`] and fails with
/// [`PairError::TokenMismatch`] otherwise. Rescaling between decimal
/// scales happens only through [`crate::math::rescale`].
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::{ChainId, Decimals, Token, TokenAddress, TokenAmount};
///
/// let usdc = Token::new(ChainId::new(1), TokenAddress::from_bytes([1u8; 32]), Decimals::new(6));
/// let a = TokenAmount::new(usdc, 1_000_000u64);
/// let b = TokenAmount::new(usdc, 500_000u64);
///
/// let sum = a.checked_add(&b).expect("same token");
/// assert_eq!(sum, TokenAmount::new(usdc, 1_500_000u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct TokenAmount {
    token: Token,
    quotient: BigUint,
}

impl TokenAmount {
    /// Creates a new `TokenAmount` from a raw quotient in the token's
    /// smallest unit.
    pub fn new(token: Token, quotient: impl Into<BigUint>) -> Self {
        Self {
            token,
            quotient: quotient.into(),
        }
    }

    /// Creates a zero amount of the given token.
    pub fn zero(token: Token) -> Self {
        Self {
            token,
            quotient: BigUint::zero(),
        }
    }

    /// Returns the token this amount is denominated in.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the raw integer quotient.
    #[must_use]
    pub const fn quotient(&self) -> &BigUint {
        &self.quotient
    }

    /// Returns `true` if the quotient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.quotient.is_zero()
    }

    /// Adds two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the tokens differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.require_same_token(other)?;
        Ok(Self {
            token: self.token,
            quotient: &self.quotient + &other.quotient,
        })
    }

    /// Subtracts `other` from `self` for amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the tokens differ, or
    /// [`PairError::InsufficientInputAmount`] if the result would be
    /// negative.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.require_same_token(other)?;
        if self.quotient < other.quotient {
            return Err(PairError::InsufficientInputAmount);
        }
        Ok(Self {
            token: self.token,
            quotient: &self.quotient - &other.quotient,
        })
    }

    /// Divides `self` by `other`, returning the exact rational result
    /// as a `(numerator, denominator)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the tokens differ, or
    /// [`PairError::InsufficientReserves`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<(BigUint, BigUint)> {
        self.require_same_token(other)?;
        if other.is_zero() {
            return Err(PairError::InsufficientReserves);
        }
        Ok((self.quotient.clone(), other.quotient.clone()))
    }

    /// Returns `true` if `self > other` for amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the tokens differ.
    pub fn greater_than(&self, other: &Self) -> Result<bool> {
        self.require_same_token(other)?;
        Ok(self.quotient > other.quotient)
    }

    /// Returns `true` if `self <= other` for amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the tokens differ.
    pub fn less_than_or_equal(&self, other: &Self) -> Result<bool> {
        self.require_same_token(other)?;
        Ok(self.quotient <= other.quotient)
    }

    fn require_same_token(&self, other: &Self) -> Result<()> {
        if self.token == other.token {
            Ok(())
        } else {
            Err(PairError::TokenMismatch(
                "arithmetic requires amounts of the same token",
            ))
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quotient)
    }
}
