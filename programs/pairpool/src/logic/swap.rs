//! Constant-product swap engine.
//!
//! The curve is fee-less: `amount_out = floor(reserve_out * amount_in /
//! (reserve_in + amount_in))`, algebraically equal to
//! `reserve_out - ceil(reserve_in * reserve_out / (reserve_in + amount_in))`
//! but free of the doubled intermediate product. The floor keeps the product
//! of reserves from ever decreasing across a swap.

use anchor_lang::prelude::*;

use crate::error::AmmError;
use crate::logic::math::{mul_div_floor, SafeMath};

/// Quote the output of a swap against mirrored reserves and enforce the
/// caller's slippage bound. Pure; the instruction handler moves the tokens.
pub fn swap_quote(
    amount_in: u64,
    min_amount_out: u64,
    reserve_in: u64,
    reserve_out: u64,
) -> Result<u64> {
    require!(amount_in > 0, AmmError::InsufficientInput);
    require!(
        reserve_in > 0 && reserve_out > 0,
        AmmError::InsufficientLiquidity
    );

    let amount_out = mul_div_floor(reserve_out, amount_in, reserve_in.safe_add(amount_in)?)?;
    require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);

    Ok(amount_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmmError;

    fn assert_amm_err<T: std::fmt::Debug>(result: Result<T>, expected: AmmError) {
        assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
    }

    #[test]
    fn quotes_floor_of_curve() {
        // 1000 * 100 / 1100 = 90.909..
        assert_eq!(swap_quote(100, 0, 1000, 1000).unwrap(), 90);
    }

    #[test]
    fn slippage_bound_is_inclusive() {
        assert_eq!(swap_quote(100, 90, 1000, 1000).unwrap(), 90);
        assert_amm_err(swap_quote(100, 91, 1000, 1000), AmmError::SlippageExceeded);
    }

    #[test]
    fn zero_input_is_rejected() {
        assert_amm_err(swap_quote(0, 0, 1000, 1000), AmmError::InsufficientInput);
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_amm_err(swap_quote(100, 0, 0, 1000), AmmError::InsufficientLiquidity);
        assert_amm_err(swap_quote(100, 0, 1000, 0), AmmError::InsufficientLiquidity);
    }

    #[test]
    fn output_never_drains_reserve() {
        // Even an enormous input leaves at least one unit behind.
        let out = swap_quote(u64::MAX / 2, 0, 1, 1000).unwrap();
        assert!(out < 1000);
    }

    #[test]
    fn reserve_product_never_decreases() {
        let cases = [
            (1000u64, 1000u64, 1u64),
            (1000, 1000, 333),
            (1, 1_000_000_000, 7),
            (123_456, 654_321, 999),
        ];
        for (reserve_in, reserve_out, amount_in) in cases {
            let out = swap_quote(amount_in, 0, reserve_in, reserve_out).unwrap();
            let k_before = reserve_in as u128 * reserve_out as u128;
            let k_after = (reserve_in + amount_in) as u128 * (reserve_out - out) as u128;
            assert!(k_after >= k_before, "k decreased for {cases:?}");
        }
    }
}
