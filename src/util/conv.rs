//! Conversion utilities.

use {
    alloy::primitives::U256,
    bigdecimal::{BigDecimal, num_bigint::ToBigInt},
    num::{BigInt, BigUint, One},
};

pub fn biguint_to_u256(i: &BigUint) -> Option<U256> {
    let bytes = i.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    Some(U256::from_be_slice(&bytes))
}

pub fn u256_to_biguint(i: &U256) -> BigUint {
    BigUint::from_bytes_be(&i.to_be_bytes::<32>())
}

pub fn bigint_to_u256(i: &BigInt) -> Option<U256> {
    if i.sign() == num::bigint::Sign::Minus {
        return None;
    }
    biguint_to_u256(i.magnitude())
}

/// Converts a `BigDecimal` to a `U256`, truncating any fractional part.
/// Returns `None` for negative values and values that overflow.
pub fn bigdecimal_to_u256(d: &BigDecimal) -> Option<U256> {
    let d = d.with_scale(0).to_bigint()?;
    bigint_to_u256(&d)
}

/// Converts a decimal amount in whole units to its smallest unit, given the
/// number of decimals of the unit. Sub-unit remainders are truncated.
pub fn decimal_to_wei(d: &BigDecimal, decimals: u32) -> Option<U256> {
    let scaled = d * BigDecimal::new(BigInt::one(), -i64::from(decimals));
    bigdecimal_to_u256(&scaled)
}

/// Converts an amount in its smallest unit into whole units.
pub fn wei_to_decimal(wei: &U256, decimals: u32) -> BigDecimal {
    BigDecimal::new(u256_to_biguint(wei).into(), i64::from(decimals))
}
