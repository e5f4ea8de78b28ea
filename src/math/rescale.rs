//! Decimal-scale normalization between currencies.

use num_bigint::BigUint;

use crate::domain::Decimals;

/// Rescales a raw integer quotient from one decimal scale to another.
///
/// - `from > to`: integer-divide by `10^(from - to)`, truncating toward
///   zero. Precision loss happens here and only here.
/// - otherwise: multiply by `10^(to - from)`, which is exact.
///
/// The truncate-when-shrinking, multiply-when-growing order is
/// load-bearing: it must match the on-chain contract bit-for-bit, so
/// the two branches are never reordered or combined.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::Decimals;
/// use amm_quoter::math::rescale;
/// use num_bigint::BigUint;
///
/// // 6 -> 18 decimals: exact multiplication by 10^12
/// let up = rescale(&BigUint::from(5u8), Decimals::new(6), Decimals::new(18));
/// assert_eq!(up, BigUint::from(5_000_000_000_000u64));
///
/// // 18 -> 6 decimals: truncating division by 10^12
/// let down = rescale(&BigUint::from(1_999_999_999_999u64), Decimals::new(18), Decimals::new(6));
/// assert_eq!(down, BigUint::from(1u8));
/// ```
#[must_use]
pub fn rescale(quotient: &BigUint, from: Decimals, to: Decimals) -> BigUint {
    if from > to {
        quotient / pow10(from.get() - to.get())
    } else {
        quotient * pow10(to.get() - from.get())
    }
}

/// Returns `10^exp` as an arbitrary-precision integer.
#[must_use]
pub fn pow10(exp: u8) -> BigUint {
    BigUint::from(10u32).pow(u32::from(exp))
}
