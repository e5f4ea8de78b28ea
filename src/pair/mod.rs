//! Constant-product pair snapshot and its swap / liquidity arithmetic.
//!
//! [`Pair`] reproduces, off-chain, the exact integer arithmetic the
//! corresponding on-chain pair contract performs, so quotes match the
//! chain bit-for-bit given the same reserves and inputs.
//!
//! # Swap Algorithm (input token → output token)
//!
//! 1. `input_with_fee = floor(input × 997 / 1000)` (0.3% fee)
//! 2. rescale `input_with_fee` from the input token's decimals to the
//!    output token's decimals
//! 3. the rescaled value is the output amount; it must stay strictly
//!    below the output reserve
//! 4. input reserve += raw input, output reserve −= output
//!
//! This variant quotes through decimal normalization directly instead
//! of solving `x·y = k`: the reserves are assumed equal in underlying
//! value per unit.
//!
//! # Immutability
//!
//! A `Pair` is a value snapshot. Every "mutating" operation returns the
//! result together with a *new* `Pair`; the receiver is never touched,
//! so failures leave no partial state and sharing across threads is
//! safe without locks.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::{Decimals, Price, Token, TokenAmount};
use crate::error::{PairError, Result};
use crate::factory;
use crate::math::{isqrt, pow10, rescale};

#[cfg(test)]
mod proptest_properties;

/// Swap fee numerator: the pool keeps 3 per mille of every input.
pub const SWAP_FEE_NUMERATOR: u32 = 997;

/// Swap fee denominator.
pub const SWAP_FEE_DENOMINATOR: u32 = 1000;

/// An immutable snapshot of a two-asset constant-product pool.
///
/// Holds two canonically-ordered reserve amounts and the identity of
/// the pool's liquidity token, derived deterministically from the pair.
///
/// # Examples
///
/// ```
/// use amm_quoter::domain::{ChainId, Decimals, Token, TokenAddress, TokenAmount};
/// use amm_quoter::pair::Pair;
///
/// let usdc = Token::new(ChainId::new(1), TokenAddress::from_bytes([1u8; 32]), Decimals::new(6));
/// let weth = Token::new(ChainId::new(1), TokenAddress::from_bytes([2u8; 32]), Decimals::new(18));
///
/// // Constructor argument order does not matter: the pair sorts.
/// let pair = Pair::new(
///     TokenAmount::new(weth, 1_000_000_000_000_000_000_000u128),
///     TokenAmount::new(usdc, 1_000_000_000_000u64),
/// )
/// .expect("distinct same-chain tokens");
/// assert_eq!(pair.token0(), &usdc);
///
/// let input = TokenAmount::new(usdc, 1_000_000u64);
/// let (output, next) = pair.get_output_amount(&input).expect("quote");
/// assert_eq!(output.token(), &weth);
/// // 1 USDC in: fee leaves 997_000, rescaled 6 -> 18 decimals
/// assert_eq!(output.quotient().to_string(), "997000000000000000");
/// // The original snapshot is untouched.
/// assert_eq!(pair.reserve0(), &TokenAmount::new(usdc, 1_000_000_000_000u64));
/// assert_eq!(next.reserve0(), &TokenAmount::new(usdc, 1_000_001_000_000u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    reserve0: TokenAmount,
    reserve1: TokenAmount,
    liquidity_token: Token,
}

impl Pair {
    /// Decimals of the pool's liquidity token, fixed regardless of the
    /// underlying assets.
    pub const LIQUIDITY_DECIMALS: u8 = 18;

    /// Symbol metadata of every pool liquidity token.
    pub const LIQUIDITY_SYMBOL: &'static str = "AMM-LP";

    /// Name metadata of every pool liquidity token.
    pub const LIQUIDITY_NAME: &'static str = "AMM Pair Liquidity";

    /// Creates a pair from two reserve amounts, canonically ordering
    /// them by token so the lower-ordered token becomes `reserve0`.
    ///
    /// The liquidity-token identity is derived from the chain and the
    /// deterministic pool address at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidPair`] if the two tokens are
    /// identical, live on different chains, or the chain has no
    /// registered factory.
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self> {
        let a_first = amount_a.token().sorts_before(amount_b.token())?;
        let (reserve0, reserve1) = if a_first {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };

        let liquidity_token = Token::new(
            reserve0.token().chain_id(),
            factory::pair_token_address(reserve0.token(), reserve1.token())?,
            Decimals::new(Self::LIQUIDITY_DECIMALS),
        );

        Ok(Self {
            reserve0,
            reserve1,
            liquidity_token,
        })
    }

    /// Computes the deterministic pool address for two tokens, in
    /// either order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`factory::pair_address`].
    pub fn get_address(token_a: &Token, token_b: &Token) -> Result<String> {
        factory::pair_address(token_a, token_b)
    }

    /// Returns the lower-ordered token of the pair.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.reserve0.token()
    }

    /// Returns the higher-ordered token of the pair.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.reserve1.token()
    }

    /// Returns the reserve of [`token0`](Self::token0).
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    /// Returns the reserve of [`token1`](Self::token1).
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    /// Returns the identity of the pool's liquidity token.
    #[must_use]
    pub const fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    /// Returns `true` if the given token is one of the pair's two
    /// tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    /// Returns the reserve held in the given token.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the token is not part of
    /// this pair.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(&self.reserve0)
        } else if token == self.token1() {
            Ok(&self.reserve1)
        } else {
            Err(PairError::TokenMismatch("token is not part of this pair"))
        }
    }

    /// Mid-price of `token0` denominated in `token1`:
    /// `reserve1 / reserve0` as an exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InsufficientReserves`] if `reserve0` is
    /// zero.
    pub fn token0_price(&self) -> Result<Price> {
        Price::new(
            *self.token0(),
            *self.token1(),
            self.reserve0.quotient().clone(),
            self.reserve1.quotient().clone(),
        )
    }

    /// Mid-price of `token1` denominated in `token0`:
    /// `reserve0 / reserve1` as an exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InsufficientReserves`] if `reserve1` is
    /// zero.
    pub fn token1_price(&self) -> Result<Price> {
        Price::new(
            *self.token1(),
            *self.token0(),
            self.reserve1.quotient().clone(),
            self.reserve0.quotient().clone(),
        )
    }

    /// Mid-price of the given token denominated in its counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::TokenMismatch`] if the token is not part of
    /// this pair, or [`PairError::InsufficientReserves`] if the token's
    /// reserve is zero.
    pub fn price_of(&self, token: &Token) -> Result<Price> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(PairError::TokenMismatch("token is not part of this pair"))
        }
    }

    /// Quotes the output amount for an exact input, returning it
    /// together with the post-trade pair.
    ///
    /// The fee is deducted from the input with truncating division,
    /// then the net input is rescaled to the output token's decimals.
    /// The new pair's input-side reserve grows by the *raw* input (the
    /// fee stays in the pool) and its output-side reserve shrinks by
    /// the output.
    ///
    /// # Errors
    ///
    /// - [`PairError::TokenMismatch`] if the input token is not in the
    ///   pair.
    /// - [`PairError::InsufficientReserves`] if either reserve is zero.
    /// - [`PairError::InsufficientInputAmount`] if the computed output
    ///   is zero or would not stay strictly below the output reserve.
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<(TokenAmount, Self)> {
        if !self.involves_token(input_amount.token()) {
            return Err(PairError::TokenMismatch(
                "input token is not part of this pair",
            ));
        }
        if self.reserve0.is_zero() || self.reserve1.is_zero() {
            return Err(PairError::InsufficientReserves);
        }

        let input_is_token0 = input_amount.token() == self.token0();
        let (input_reserve, output_reserve) = if input_is_token0 {
            (&self.reserve0, &self.reserve1)
        } else {
            (&self.reserve1, &self.reserve0)
        };

        let input_with_fee =
            input_amount.quotient() * SWAP_FEE_NUMERATOR / SWAP_FEE_DENOMINATOR;
        let output_quotient = rescale(
            &input_with_fee,
            input_amount.token().decimals(),
            output_reserve.token().decimals(),
        );
        if output_quotient.is_zero() || &output_quotient >= output_reserve.quotient() {
            return Err(PairError::InsufficientInputAmount);
        }
        let output_amount = TokenAmount::new(*output_reserve.token(), output_quotient);

        let new_input_reserve = input_reserve.checked_add(input_amount)?;
        let new_output_reserve = output_reserve.checked_sub(&output_amount)?;
        let next = self.with_reserves(new_input_reserve, new_output_reserve, input_is_token0);
        Ok((output_amount, next))
    }

    /// Quotes the input amount required for an exact output, returning
    /// it together with the post-trade pair.
    ///
    /// The requested output is rescaled to the input token's decimals,
    /// then the fee is inverted with `floor(q × 1000 / 997)`. The floor
    /// here is deliberate: the reference contract truncates in this
    /// step too, so the quote may slightly under-state the true
    /// required input and must not be "fixed" to a ceiling.
    ///
    /// # Errors
    ///
    /// - [`PairError::TokenMismatch`] if the output token is not in the
    ///   pair.
    /// - [`PairError::InsufficientReserves`] if either reserve is zero
    ///   or the requested output meets or exceeds the output reserve.
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<(TokenAmount, Self)> {
        if !self.involves_token(output_amount.token()) {
            return Err(PairError::TokenMismatch(
                "output token is not part of this pair",
            ));
        }

        let output_is_token0 = output_amount.token() == self.token0();
        let (output_reserve, input_reserve) = if output_is_token0 {
            (&self.reserve0, &self.reserve1)
        } else {
            (&self.reserve1, &self.reserve0)
        };

        if self.reserve0.is_zero()
            || self.reserve1.is_zero()
            || output_amount.quotient() >= output_reserve.quotient()
        {
            return Err(PairError::InsufficientReserves);
        }

        let pre_fee = rescale(
            output_amount.quotient(),
            output_amount.token().decimals(),
            input_reserve.token().decimals(),
        );
        let input_quotient = pre_fee * SWAP_FEE_DENOMINATOR / SWAP_FEE_NUMERATOR;
        let input_amount = TokenAmount::new(*input_reserve.token(), input_quotient);

        let new_input_reserve = input_reserve.checked_add(&input_amount)?;
        let new_output_reserve = output_reserve.checked_sub(output_amount)?;
        let next = self.with_reserves(new_input_reserve, new_output_reserve, !output_is_token0);
        Ok((input_amount, next))
    }

    /// Combines two reserve quotients into a single decimals-normalized
    /// magnitude: the lower-decimals side is rescaled up to the
    /// higher-decimals side, then both are summed.
    ///
    /// Used only as a ratio basis for liquidity accounting, not as an
    /// exact valuation.
    #[must_use]
    pub fn liquidity_unit(r0: &BigUint, r1: &BigUint, d0: Decimals, d1: Decimals) -> BigUint {
        if d0 > d1 {
            rescale(r1, d1, d0) + r0
        } else if d1 > d0 {
            rescale(r0, d0, d1) + r1
        } else {
            r0 + r1
        }
    }

    /// Computes the liquidity tokens minted for a deposit of both
    /// assets.
    ///
    /// The first deposit bootstraps the 18-decimals liquidity token:
    /// `floor(unit × 10^18 / 10^max(d0, d1))`. Later deposits mint
    /// proportionally: `floor(unit × total_supply / reserve_unit)`.
    ///
    /// # Errors
    ///
    /// - [`PairError::TokenMismatch`] if `total_supply` is not
    ///   denominated in this pair's liquidity token, or the deposited
    ///   amounts do not match the pair's tokens.
    /// - [`PairError::InvalidPair`] if the deposited amounts cannot be
    ///   ordered (identical or cross-chain tokens).
    /// - [`PairError::InsufficientReserves`] if the pool has supply but
    ///   empty reserves.
    /// - [`PairError::InsufficientInputAmount`] if the minted amount is
    ///   not strictly positive.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount> {
        if total_supply.token() != &self.liquidity_token {
            return Err(PairError::TokenMismatch(
                "total supply must be denominated in the pair's liquidity token",
            ));
        }

        let a_first = amount_a.token().sorts_before(amount_b.token())?;
        let (amount0, amount1) = if a_first {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if amount0.token() != self.token0() || amount1.token() != self.token1() {
            return Err(PairError::TokenMismatch(
                "deposited amounts do not match the pair's tokens",
            ));
        }

        let d0 = self.token0().decimals();
        let d1 = self.token1().decimals();
        let added_unit = Self::liquidity_unit(amount0.quotient(), amount1.quotient(), d0, d1);

        let liquidity = if total_supply.is_zero() {
            let max_decimals = d0.max(d1);
            added_unit * pow10(Self::LIQUIDITY_DECIMALS) / pow10(max_decimals.get())
        } else {
            let reserve_unit =
                Self::liquidity_unit(self.reserve0.quotient(), self.reserve1.quotient(), d0, d1);
            if reserve_unit.is_zero() {
                return Err(PairError::InsufficientReserves);
            }
            added_unit * total_supply.quotient() / reserve_unit
        };

        if liquidity.is_zero() {
            return Err(PairError::InsufficientInputAmount);
        }
        Ok(TokenAmount::new(self.liquidity_token, liquidity))
    }

    /// Values a liquidity-token share in one of the pair's assets,
    /// optionally accounting for protocol-fee growth since `k_last`.
    ///
    /// With `fee_on` and a non-zero `k_last`, the protocol's accrued
    /// share is synthesized as extra supply before the pro-rata split:
    /// `floor(ts × (√k − √k_last) / (√k × 5 + √k_last))` added to the
    /// total supply when the invariant has grown.
    ///
    /// # Errors
    ///
    /// - [`PairError::TokenMismatch`] if `token` is not in the pair, if
    ///   `total_supply` or `liquidity` is not denominated in the
    ///   liquidity token, or if `liquidity` exceeds `total_supply`.
    /// - [`PairError::MissingKLast`] if `fee_on` is set without a prior
    ///   invariant value.
    /// - [`PairError::InsufficientReserves`] if the (adjusted) total
    ///   supply is zero.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigUint>,
    ) -> Result<TokenAmount> {
        if !self.involves_token(token) {
            return Err(PairError::TokenMismatch("token is not part of this pair"));
        }
        if total_supply.token() != &self.liquidity_token {
            return Err(PairError::TokenMismatch(
                "total supply must be denominated in the pair's liquidity token",
            ));
        }
        if liquidity.token() != &self.liquidity_token {
            return Err(PairError::TokenMismatch(
                "liquidity must be denominated in the pair's liquidity token",
            ));
        }
        if liquidity.quotient() > total_supply.quotient() {
            return Err(PairError::TokenMismatch(
                "liquidity exceeds total supply",
            ));
        }

        let total_supply_adjusted = if fee_on {
            let k_last = k_last.ok_or(PairError::MissingKLast)?;
            if k_last.is_zero() {
                total_supply.quotient().clone()
            } else {
                let root_k = isqrt(&(self.reserve0.quotient() * self.reserve1.quotient()));
                let root_k_last = isqrt(k_last);
                if root_k > root_k_last {
                    let numerator = total_supply.quotient() * (&root_k - &root_k_last);
                    let denominator = &root_k * 5u32 + &root_k_last;
                    total_supply.quotient() + numerator / denominator
                } else {
                    total_supply.quotient().clone()
                }
            }
        } else {
            total_supply.quotient().clone()
        };

        if total_supply_adjusted.is_zero() {
            return Err(PairError::InsufficientReserves);
        }
        let value = liquidity.quotient() * self.reserve_of(token)?.quotient()
            / total_supply_adjusted;
        Ok(TokenAmount::new(*token, value))
    }

    /// Builds the post-trade snapshot, keeping token order and the
    /// derived liquidity token.
    fn with_reserves(
        &self,
        input_side: TokenAmount,
        output_side: TokenAmount,
        input_is_token0: bool,
    ) -> Self {
        let (reserve0, reserve1) = if input_is_token0 {
            (input_side, output_side)
        } else {
            (output_side, input_side)
        };
        Self {
            reserve0,
            reserve1,
            liquidity_token: self.liquidity_token,
        }
    }
}
