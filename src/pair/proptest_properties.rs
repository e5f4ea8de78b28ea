//! Property-based tests for the pair arithmetic.

#![allow(clippy::panic)]

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::domain::{ChainId, Decimals, Token, TokenAddress, TokenAmount};
use crate::math::isqrt;
use crate::pair::Pair;

fn token(tag: u8, decimals: u8) -> Token {
    Token::new(
        ChainId::new(1),
        TokenAddress::from_bytes([tag; 32]),
        Decimals::new(decimals),
    )
}

fn make_pair(dec_a: u8, r_a: u128, dec_b: u8, r_b: u128) -> Pair {
    let a = token(1, dec_a);
    let b = token(2, dec_b);
    Pair::new(
        TokenAmount::new(a, BigUint::from(r_a)),
        TokenAmount::new(b, BigUint::from(r_b)),
    )
    .unwrap_or_else(|e| panic!("pair construction failed: {e}"))
}

proptest! {
    /// Canonical ordering holds no matter the constructor argument
    /// order.
    #[test]
    fn reserves_are_canonically_ordered(
        tag_a in 1u8..=127,
        tag_b in 128u8..=255,
        r_a in 0u128..u128::from(u64::MAX),
        r_b in 0u128..u128::from(u64::MAX),
    ) {
        let a = TokenAmount::new(token(tag_a, 6), BigUint::from(r_a));
        let b = TokenAmount::new(token(tag_b, 18), BigUint::from(r_b));
        for pair in [
            Pair::new(a.clone(), b.clone()),
            Pair::new(b.clone(), a.clone()),
        ] {
            let pair = pair.unwrap_or_else(|e| panic!("pair construction failed: {e}"));
            prop_assert_eq!(
                pair.token0().sorts_before(pair.token1()),
                Ok(true)
            );
        }
    }

    /// A successful forward quote conserves value exactly: the input
    /// reserve grows by the raw input and the output reserve shrinks
    /// by the output, with nothing lost.
    #[test]
    fn output_quote_conserves_reserves(
        dec_in in 0u8..=24,
        dec_out in 0u8..=24,
        r_in in 1u128..u128::from(u64::MAX),
        r_out in 1u128..u128::from(u64::MAX),
        input in 1u128..u128::from(u64::MAX),
    ) {
        let pair = make_pair(dec_in, r_in, dec_out, r_out);
        let input = TokenAmount::new(token(1, dec_in), BigUint::from(input));
        if let Ok((output, next)) = pair.get_output_amount(&input) {
            let next_in = next.reserve_of(input.token()).map_err(|e| {
                TestCaseError::fail(format!("missing input reserve: {e}"))
            })?;
            let next_out = next.reserve_of(output.token()).map_err(|e| {
                TestCaseError::fail(format!("missing output reserve: {e}"))
            })?;
            let prev_in = pair.reserve_of(input.token()).map_err(|e| {
                TestCaseError::fail(format!("missing input reserve: {e}"))
            })?;
            let prev_out = pair.reserve_of(output.token()).map_err(|e| {
                TestCaseError::fail(format!("missing output reserve: {e}"))
            })?;
            prop_assert_eq!(
                next_in.quotient(),
                &(prev_in.quotient() + input.quotient())
            );
            prop_assert_eq!(
                next_out.quotient(),
                &(prev_out.quotient() - output.quotient())
            );
            // Strictly below the prior reserve, never draining it.
            prop_assert!(output.quotient() < prev_out.quotient());
        }
    }

    /// Quoting the inverse of a forward quote never asks for more than
    /// the original input: truncation only ever loses value.
    #[test]
    fn round_trip_input_at_most_original(
        dec_in in 0u8..=24,
        dec_out in 0u8..=24,
        r_in in 1u128..u128::from(u64::MAX),
        r_out in 1u128..u128::from(u64::MAX),
        input in 1u128..u128::from(u64::MAX),
    ) {
        let pair = make_pair(dec_in, r_in, dec_out, r_out);
        let original = TokenAmount::new(token(1, dec_in), BigUint::from(input));
        if let Ok((output, _)) = pair.get_output_amount(&original) {
            if let Ok((back, _)) = pair.get_input_amount(&output) {
                prop_assert!(back.quotient() <= original.quotient());
            }
        }
    }

    /// The integer square root is the floor of the real square root:
    /// `isqrt(n)^2 <= n < (isqrt(n)+1)^2`.
    #[test]
    fn isqrt_is_floor_sqrt(n in any::<u128>()) {
        let n = BigUint::from(n);
        let root = isqrt(&n);
        prop_assert!(&root * &root <= n);
        let next = &root + 1u8;
        prop_assert!(&next * &next > n);
    }

    /// Quoting never mutates the receiving snapshot.
    #[test]
    fn quotes_leave_snapshot_untouched(
        r_in in 1u128..u128::from(u64::MAX),
        r_out in 1u128..u128::from(u64::MAX),
        input in 1u128..u128::from(u64::MAX),
    ) {
        let pair = make_pair(18, r_in, 18, r_out);
        let before = pair.clone();
        let amount = TokenAmount::new(token(1, 18), BigUint::from(input));
        let _ = pair.get_output_amount(&amount);
        let _ = pair.get_input_amount(&TokenAmount::new(token(2, 18), BigUint::from(input)));
        prop_assert_eq!(pair, before);
    }
}
