//! Token decimal places.

use num_bigint::BigUint;

/// Represents the number of decimal places for a token amount.
///
/// The full `0..=255` range is valid: amounts are arbitrary-precision,
/// so no scale factor can overflow. Construction is therefore
/// infallible.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::Decimals;
///
/// let d = Decimals::new(6);
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Standard EVM-style decimal places (18).
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a new `Decimals` value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as an arbitrary-precision integer.
    #[must_use]
    pub fn factor(&self) -> BigUint {
        BigUint::from(10u32).pow(u32::from(self.0))
    }
}
