//! Deterministic pool-address derivation.

use sha2::{Digest, Sha256};

use crate::domain::{ChainId, Token, TokenAddress};
use crate::error::{PairError, Result};

/// Factory addresses registered per chain.
///
/// The derivation commits to the deploying factory, so two chains with
/// the same token addresses still produce distinct pool addresses.
const FACTORY_REGISTRY: &[(ChainId, TokenAddress)] = &[
    (ChainId::new(1), TokenAddress::from_bytes([0x5C; 32])),
    (ChainId::new(56), TokenAddress::from_bytes([0xCA; 32])),
    (ChainId::new(137), TokenAddress::from_bytes([0x1F; 32])),
    (ChainId::new(31_337), TokenAddress::from_bytes([0xEE; 32])),
];

/// Returns the factory address registered for `chain`.
///
/// # Errors
///
/// Returns [`PairError::InvalidPair`] if no factory is registered for
/// the chain.
pub fn factory_address(chain: ChainId) -> Result<TokenAddress> {
    FACTORY_REGISTRY
        .iter()
        .find(|(c, _)| *c == chain)
        .map(|(_, addr)| *addr)
        .ok_or(PairError::InvalidPair("no factory registered for chain"))
}

/// Derives the deterministic pool address for a token pair.
///
/// The two tokens are canonically ordered first, so the result is
/// stable under argument swap: `pair_token_address(a, b) ==
/// pair_token_address(b, a)`. The address is
/// `SHA-256(factory ‖ addr0 ‖ addr1)`.
///
/// # Errors
///
/// Propagates ordering failures (identical tokens, cross-chain tokens)
/// and an unregistered chain, all as [`PairError::InvalidPair`].
pub fn pair_token_address(token_a: &Token, token_b: &Token) -> Result<TokenAddress> {
    let a_first = token_a.sorts_before(token_b)?;
    let (token0, token1) = if a_first {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let factory = factory_address(token0.chain_id())?;

    let mut hasher = Sha256::new();
    hasher.update(factory.as_bytes());
    hasher.update(token0.address().as_bytes());
    hasher.update(token1.address().as_bytes());
    Ok(TokenAddress::from_bytes(hasher.finalize().into()))
}

/// Derives the deterministic pool address as a hex string.
///
/// # Errors
///
/// Same failure modes as [`pair_token_address`].
pub fn pair_address(token_a: &Token, token_b: &Token) -> Result<String> {
    Ok(pair_token_address(token_a, token_b)?.to_string())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn tok(chain: u64, addr_byte: u8) -> Token {
        Token::new(
            ChainId::new(chain),
            TokenAddress::from_bytes([addr_byte; 32]),
            Decimals::new(18),
        )
    }

    #[test]
    fn factory_lookup_registered() {
        let Ok(addr) = factory_address(ChainId::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(addr, TokenAddress::from_bytes([0x5C; 32]));
    }

    #[test]
    fn factory_lookup_unregistered() {
        assert_eq!(
            factory_address(ChainId::new(999)),
            Err(PairError::InvalidPair("no factory registered for chain"))
        );
    }

    #[test]
    fn stable_under_argument_swap() {
        let a = tok(1, 1);
        let b = tok(1, 2);
        assert_eq!(pair_token_address(&a, &b), pair_token_address(&b, &a));
        assert_eq!(pair_address(&a, &b), pair_address(&b, &a));
    }

    #[test]
    fn distinct_pairs_distinct_addresses() {
        let a = tok(1, 1);
        let b = tok(1, 2);
        let c = tok(1, 3);
        let (Ok(ab), Ok(ac)) = (pair_token_address(&a, &b), pair_token_address(&a, &c)) else {
            panic!("expected Ok");
        };
        assert_ne!(ab, ac);
    }

    #[test]
    fn rejects_identical_tokens() {
        let a = tok(1, 1);
        assert!(pair_token_address(&a, &a).is_err());
    }

    #[test]
    fn rejects_cross_chain_tokens() {
        let a = tok(1, 1);
        let b = tok(56, 2);
        assert!(pair_token_address(&a, &b).is_err());
    }

    #[test]
    fn address_string_is_hex() {
        let Ok(s) = pair_address(&tok(1, 1), &tok(1, 2)) else {
            panic!("expected Ok");
        };
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 66);
    }
}
