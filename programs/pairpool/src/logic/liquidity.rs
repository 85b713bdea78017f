//! Share accounting for deposits and withdrawals.
//!
//! Every division rounds down, so the pool never mints more shares than the
//! deposited value and never pays out more than the proportional claim.

use anchor_lang::prelude::*;
use integer_sqrt::IntegerSquareRoot;

use crate::constants::MIN_LIQUIDITY;
use crate::error::AmmError;
use crate::logic::math::mul_div_floor;

/// Outcome of a deposit quote: the amounts actually taken from the depositor
/// and the shares minted against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares: u64,
}

/// Quote a deposit against mirrored reserves and share supply.
///
/// On an empty pool the offered amounts become the reserves exactly and the
/// initial share quantity is the geometric mean of the pair, floored, with
/// `MIN_LIQUIDITY` as the accepted minimum. On a funded pool the larger
/// offered side is scaled back to the current reserve ratio and shares are
/// the proportional claim of the effective amounts, floored on both sides.
pub fn deposit(
    amount_a: u64,
    amount_b: u64,
    min_amount_a: u64,
    min_amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
) -> Result<Deposit> {
    let (effective_a, effective_b) = if lp_supply == 0 {
        require!(amount_a > 0 && amount_b > 0, AmmError::InsufficientInput);
        (amount_a, amount_b)
    } else {
        // The ratio check needs live reserves; a funded supply with an empty
        // vault means the mirrors are inconsistent.
        require!(
            reserve_a > 0 && reserve_b > 0,
            AmmError::InsufficientLiquidity
        );
        let optimal_b = mul_div_floor(amount_a, reserve_b, reserve_a)?;
        if optimal_b <= amount_b {
            (amount_a, optimal_b)
        } else {
            let optimal_a = mul_div_floor(amount_b, reserve_a, reserve_b)?;
            (optimal_a, amount_b)
        }
    };

    require!(
        effective_a >= min_amount_a && effective_b >= min_amount_b,
        AmmError::SlippageExceeded
    );

    let shares = if lp_supply == 0 {
        let shares = ((effective_a as u128) * (effective_b as u128)).integer_sqrt();
        let shares = u64::try_from(shares).map_err(|_| AmmError::MathOverflow)?;
        require!(shares >= MIN_LIQUIDITY, AmmError::InsufficientInput);
        shares
    } else {
        let by_a = mul_div_floor(effective_a, lp_supply, reserve_a)?;
        let by_b = mul_div_floor(effective_b, lp_supply, reserve_b)?;
        let shares = by_a.min(by_b);
        require!(shares > 0, AmmError::InsufficientInput);
        shares
    };

    Ok(Deposit {
        amount_a: effective_a,
        amount_b: effective_b,
        shares,
    })
}

/// Quote the proportional payout for burning `shares` against mirrored
/// reserves and share supply.
pub fn withdraw(
    shares: u64,
    min_amount_a: u64,
    min_amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
) -> Result<(u64, u64)> {
    require!(shares > 0, AmmError::InsufficientInput);
    require!(lp_supply > 0, AmmError::InsufficientLiquidity);

    let amount_a = mul_div_floor(reserve_a, shares, lp_supply)?;
    let amount_b = mul_div_floor(reserve_b, shares, lp_supply)?;

    require!(
        amount_a >= min_amount_a && amount_b >= min_amount_b,
        AmmError::SlippageExceeded
    );
    // Unreachable through the formula; guards against inconsistent mirrors.
    require!(
        amount_a <= reserve_a && amount_b <= reserve_b,
        AmmError::InsufficientReserves
    );

    Ok((amount_a, amount_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmmError;

    fn assert_amm_err<T: std::fmt::Debug>(result: Result<T>, expected: AmmError) {
        assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
    }

    #[test]
    fn initial_funding_uses_geometric_mean() {
        let quote = deposit(1000, 1000, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(
            quote,
            Deposit {
                amount_a: 1000,
                amount_b: 1000,
                shares: 1000,
            }
        );

        // Uneven pair: isqrt(4000 * 1000) = 2000
        assert_eq!(deposit(4000, 1000, 0, 0, 0, 0, 0).unwrap().shares, 2000);
    }

    #[test]
    fn initial_funding_rejects_zero_sides_and_dust() {
        assert_amm_err(deposit(0, 1000, 0, 0, 0, 0, 0), AmmError::InsufficientInput);
        assert_amm_err(deposit(1000, 0, 0, 0, 0, 0, 0), AmmError::InsufficientInput);
        // isqrt(9 * 9) = 9 < MIN_LIQUIDITY
        assert_amm_err(deposit(9, 9, 0, 0, 0, 0, 0), AmmError::InsufficientInput);
    }

    #[test]
    fn funded_deposit_scales_the_larger_side_down() {
        // Pool at 2:1; offering 300/300 only needs 150 of B.
        let quote = deposit(300, 300, 0, 0, 2000, 1000, 1000).unwrap();
        assert_eq!(quote.amount_a, 300);
        assert_eq!(quote.amount_b, 150);
        assert_eq!(quote.shares, 150);

        // Offering too little B instead scales A down.
        let quote = deposit(300, 100, 0, 0, 2000, 1000, 1000).unwrap();
        assert_eq!(quote.amount_a, 200);
        assert_eq!(quote.amount_b, 100);
        assert_eq!(quote.shares, 100);
    }

    #[test]
    fn funded_deposit_enforces_slippage_on_effective_amounts() {
        // Effective B is 150, under the 200 minimum.
        assert_amm_err(
            deposit(300, 300, 0, 200, 2000, 1000, 1000),
            AmmError::SlippageExceeded,
        );
    }

    #[test]
    fn shares_never_exceed_proportional_value() {
        // A ragged ratio where the two floors disagree: shares must take the
        // smaller one.
        let quote = deposit(100, 100, 0, 0, 333, 777, 1000).unwrap();
        let by_a = (quote.amount_a as u128 * 1000) / 333;
        let by_b = (quote.amount_b as u128 * 1000) / 777;
        assert_eq!(quote.shares as u128, by_a.min(by_b));
    }

    #[test]
    fn withdraw_pays_floor_of_claim() {
        assert_eq!(withdraw(500, 0, 0, 1000, 1000, 1000).unwrap(), (500, 500));
        // 333/1000 of 1000 = 333.0, of 700 = 233.1 -> 233
        assert_eq!(withdraw(333, 0, 0, 1000, 700, 1000).unwrap(), (333, 233));
    }

    #[test]
    fn withdraw_guards() {
        assert_amm_err(withdraw(0, 0, 0, 1000, 1000, 1000), AmmError::InsufficientInput);
        assert_amm_err(withdraw(10, 0, 0, 0, 0, 0), AmmError::InsufficientLiquidity);
        assert_amm_err(
            withdraw(500, 501, 0, 1000, 1000, 1000),
            AmmError::SlippageExceeded,
        );
    }

    #[test]
    fn deposit_then_withdraw_never_profits() {
        let cases = [
            (1000u64, 1000u64, 333u64, 719u64),
            (5000, 3, 100, 100),
            (123_456, 654_321, 777, 13),
        ];
        for (reserve_a, reserve_b, amount_a, amount_b) in cases {
            let supply = 10_000u64;
            let Ok(quote) = deposit(amount_a, amount_b, 0, 0, reserve_a, reserve_b, supply) else {
                continue;
            };
            let (out_a, out_b) = withdraw(
                quote.shares,
                0,
                0,
                reserve_a + quote.amount_a,
                reserve_b + quote.amount_b,
                supply + quote.shares,
            )
            .unwrap();
            assert!(out_a <= quote.amount_a, "gained A in {cases:?}");
            assert!(out_b <= quote.amount_b, "gained B in {cases:?}");
        }
    }
}
