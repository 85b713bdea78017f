use anchor_lang::prelude::*;

#[constant]
pub const POOL_SEED: &[u8] = b"POOL";

#[constant]
pub const LP_MINT_SEED: &[u8] = b"LP_MINT";

/// Floor on the share amount minted by the first deposit. A pool whose
/// initial position rounds to fewer shares than this is rejected, so later
/// deposits can never be diluted to zero by integer division.
#[constant]
pub const MIN_LIQUIDITY: u64 = 100;

#[constant]
pub const LP_MINT_DECIMALS: u8 = 6;
