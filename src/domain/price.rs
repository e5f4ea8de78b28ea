//! Exchange rate between two tokens.

use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::Zero;

use super::Token;
use crate::error::{PairError, Result};

/// A rational exchange rate pointing from a base token to a quote token.
///
/// Stored as an exact `numerator / denominator` pair of
/// arbitrary-precision integers; no floating point is involved anywhere.
/// The fraction is deliberately kept unreduced so the raw reserve
/// quotients that produced it remain observable.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::{ChainId, Decimals, Price, Token, TokenAddress};
/// use num_bigint::BigUint;
///
/// let base = Token::new(ChainId::new(1), TokenAddress::from_bytes([1u8; 32]), Decimals::new(6));
/// let quote = Token::new(ChainId::new(1), TokenAddress::from_bytes([2u8; 32]), Decimals::new(18));
///
/// let price = Price::new(base, quote, BigUint::from(100u8), BigUint::from(300u16))
///     .expect("non-zero denominator");
/// assert_eq!(price.numerator(), &BigUint::from(300u16));
/// assert_eq!(price.denominator(), &BigUint::from(100u8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    base: Token,
    quote: Token,
    value: Ratio<BigUint>,
}

impl Price {
    /// Creates a new `Price` from a base token, a quote token and the
    /// raw `denominator` / `numerator` quotients.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InsufficientReserves`] if `denominator` is
    /// zero.
    pub fn new(
        base: Token,
        quote: Token,
        denominator: BigUint,
        numerator: BigUint,
    ) -> Result<Self> {
        if denominator.is_zero() {
            return Err(PairError::InsufficientReserves);
        }
        Ok(Self {
            base,
            quote,
            value: Ratio::new_raw(numerator, denominator),
        })
    }

    /// Returns the token this price is quoted from.
    #[must_use]
    pub const fn base(&self) -> &Token {
        &self.base
    }

    /// Returns the token this price is quoted into.
    #[must_use]
    pub const fn quote(&self) -> &Token {
        &self.quote
    }

    /// Returns the raw numerator (quote-side quotient).
    #[must_use]
    pub fn numerator(&self) -> &BigUint {
        self.value.numer()
    }

    /// Returns the raw denominator (base-side quotient).
    #[must_use]
    pub fn denominator(&self) -> &BigUint {
        self.value.denom()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ChainId, Decimals, TokenAddress};

    fn tok(addr_byte: u8, dec: u8) -> Token {
        Token::new(
            ChainId::new(1),
            TokenAddress::from_bytes([addr_byte; 32]),
            Decimals::new(dec),
        )
    }

    #[test]
    fn new_valid() {
        let Ok(p) = Price::new(
            tok(1, 6),
            tok(2, 18),
            BigUint::from(100u8),
            BigUint::from(200u8),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(p.base(), &tok(1, 6));
        assert_eq!(p.quote(), &tok(2, 18));
        assert_eq!(p.numerator(), &BigUint::from(200u8));
        assert_eq!(p.denominator(), &BigUint::from(100u8));
    }

    #[test]
    fn new_zero_denominator() {
        let result = Price::new(
            tok(1, 6),
            tok(2, 18),
            BigUint::zero(),
            BigUint::from(200u8),
        );
        assert_eq!(result, Err(PairError::InsufficientReserves));
    }

    #[test]
    fn zero_numerator_is_allowed() {
        let p = Price::new(tok(1, 6), tok(2, 18), BigUint::from(1u8), BigUint::zero());
        assert!(p.is_ok());
    }

    #[test]
    fn fraction_is_not_reduced() {
        // 1_000_000 / 2_000_000 must stay raw, not collapse to 1/2
        let Ok(p) = Price::new(
            tok(1, 6),
            tok(2, 18),
            BigUint::from(2_000_000u32),
            BigUint::from(1_000_000u32),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(p.numerator(), &BigUint::from(1_000_000u32));
        assert_eq!(p.denominator(), &BigUint::from(2_000_000u32));
    }
}
