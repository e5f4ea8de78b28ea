//! Integer square root on unbounded integers.

use num_bigint::BigUint;
use num_traits::Zero;

/// Floor of the exact square root of a non-negative integer.
///
/// Babylonian (Newton) iteration: starting from the value itself, the
/// estimate strictly decreases until it crosses the true root, at which
/// point it stops changing downwards and the loop terminates. Exact for
/// perfect squares, correctly floored otherwise, and `isqrt(0) == 0`.
///
/// Runs in `O(log n)` iterations, each a bounded-size division.
///
/// # Examples
///
/// ```
/// use amm_quoter::math::isqrt;
/// use num_bigint::BigUint;
///
/// assert_eq!(isqrt(&BigUint::from(144u8)), BigUint::from(12u8));
/// assert_eq!(isqrt(&BigUint::from(145u8)), BigUint::from(12u8));
/// ```
#[must_use]
pub fn isqrt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    let mut x = n.clone();
    let mut y = (&x + 1u8) / 2u8;
    while y < x {
        x = y;
        y = (&x + n / &x) / 2u8;
    }
    x
}
