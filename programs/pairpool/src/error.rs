//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Mints must form a distinct pair in canonical byte order")]
    InvalidPair,

    #[msg("Input amount is zero or below the accepted minimum")]
    InsufficientInput,

    #[msg("Withdrawal exceeds mirrored reserves")]
    InsufficientReserves,

    #[msg("Pool holds no liquidity")]
    InsufficientLiquidity,

    #[msg("Slippage exceeded")]
    SlippageExceeded,

    #[msg("Signer is not the namespace administrator")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
