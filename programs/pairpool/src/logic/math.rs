//! Checked arithmetic shared by the liquidity and swap engines.

use anchor_lang::prelude::*;

use crate::error::AmmError;

pub trait SafeMath<T> {
    fn safe_add(self, v: T) -> Result<T>;
    fn safe_sub(self, v: T) -> Result<T>;
    fn safe_mul(self, v: T) -> Result<T>;
}

macro_rules! impl_safe_math {
    ($type:ty) => {
        impl SafeMath<$type> for $type {
            fn safe_add(self, v: $type) -> Result<$type> {
                self.checked_add(v).ok_or_else(|| AmmError::MathOverflow.into())
            }

            fn safe_sub(self, v: $type) -> Result<$type> {
                self.checked_sub(v).ok_or_else(|| AmmError::MathOverflow.into())
            }

            fn safe_mul(self, v: $type) -> Result<$type> {
                self.checked_mul(v).ok_or_else(|| AmmError::MathOverflow.into())
            }
        }
    };
}

impl_safe_math!(u64);
impl_safe_math!(u128);

/// floor(a * b / d) with a u128 intermediate. The single rounding primitive
/// for share minting, proportional withdrawal and the swap curve; always
/// rounds in the pool's favor.
pub fn mul_div_floor(a: u64, b: u64, d: u64) -> Result<u64> {
    if d == 0 {
        return Err(AmmError::DivisionByZero.into());
    }
    let value = (a as u128).safe_mul(b as u128)? / (d as u128);
    u64::try_from(value).map_err(|_| AmmError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floor_rounds_down() {
        assert_eq!(mul_div_floor(10, 10, 3).unwrap(), 33);
        assert_eq!(mul_div_floor(1, 1, 2).unwrap(), 0);
        assert_eq!(mul_div_floor(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn mul_div_floor_rejects_zero_divisor() {
        assert!(mul_div_floor(1, 1, 0).is_err());
    }

    #[test]
    fn mul_div_floor_rejects_overflowing_quotient() {
        assert!(mul_div_floor(u64::MAX, u64::MAX, 1).is_err());
    }

    #[test]
    fn safe_math_checks_bounds() {
        assert!(u64::MAX.safe_add(1).is_err());
        assert!(0u64.safe_sub(1).is_err());
        assert_eq!(7u64.safe_mul(6).unwrap(), 42);
    }
}
