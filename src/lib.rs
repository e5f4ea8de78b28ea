//! # AMM Quoter
//!
//! Off-chain constant-product pair calculator: reproduce the integer
//! arithmetic of an on-chain two-asset AMM pair bit-for-bit, without a
//! node in the loop.
//!
//! Given a reserve snapshot, this crate answers the questions a router
//! or position tracker asks of a pair contract:
//!
//! - **Swap quoting** — output for an exact input, input for an exact
//!   output, with the 0.3% fee and decimal normalization applied in the
//!   same order and with the same truncation as the contract.
//! - **Liquidity accounting** — tokens minted for a deposit, and the
//!   redemption value of a liquidity share including protocol-fee
//!   growth since the last stored invariant.
//! - **Pool identity** — the deterministic pool address for a token
//!   pair, so addresses can be computed before the pool exists.
//!
//! All arithmetic runs on arbitrary-precision unsigned integers
//! ([`num_bigint::BigUint`]); there is no floating point anywhere, so
//! results are platform-independent and exactly reproducible.
//!
//! # Quick Start
//!
//! ```rust
//! use amm_quoter::prelude::*;
//!
//! // 1. Define two tokens on the same chain
//! let usdc = Token::new(
//!     ChainId::new(1),
//!     TokenAddress::from_bytes([1u8; 32]),
//!     Decimals::new(6),
//! );
//! let weth = Token::new(
//!     ChainId::new(1),
//!     TokenAddress::from_bytes([2u8; 32]),
//!     Decimals::new(18),
//! );
//!
//! // 2. Snapshot a pool: 1,000,000 USDC against 1,000 WETH
//! let pair = Pair::new(
//!     TokenAmount::new(usdc, 1_000_000_000_000u64),
//!     TokenAmount::new(weth, 1_000_000_000_000_000_000_000u128),
//! )
//! .expect("distinct same-chain tokens");
//!
//! // 3. Quote a swap: 1 USDC in
//! let (output, next) = pair
//!     .get_output_amount(&TokenAmount::new(usdc, 1_000_000u64))
//!     .expect("quote");
//! assert_eq!(output.token(), &weth);
//! assert_eq!(output.quotient().to_string(), "997000000000000000");
//!
//! // The snapshot is immutable; `next` carries the post-trade reserves.
//! assert!(next.reserve0().quotient() > pair.reserve0().quotient());
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Token`](domain::Token), [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`ChainId`](domain::ChainId), [`TokenAddress`](domain::TokenAddress), [`Decimals`](domain::Decimals) |
//! | [`pair`] | The [`Pair`](pair::Pair) snapshot and its swap / liquidity operations |
//! | [`factory`] | Deterministic pool-address derivation per chain |
//! | [`math`] | Integer square root and decimal rescaling primitives |
//! | [`error`] | [`PairError`](error::PairError) closed error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pair;
pub mod prelude;
