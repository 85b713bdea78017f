#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod state;

use instructions::*;

declare_id!("4E9nFrSPkYYuocxm58MAjmCwaPEpC9Dte5wBR9rbxR3e");

#[program]
pub mod pairpool {
    use super::*;

    /// Allocate the administrator namespace under which pools are created.
    pub fn create_amm(ctx: Context<CreateAmm>) -> Result<()> {
        instructions::create_amm(ctx)
    }

    /// Allocate a pool and its liquidity-share mint for an ordered mint pair.
    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        instructions::create_pool(ctx)
    }

    /// Materialize the pool's two reserve vaults.
    pub fn create_pool_vaults(ctx: Context<CreatePoolVaults>) -> Result<()> {
        instructions::create_pool_vaults(ctx)
    }

    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_a: u64,
        amount_b: u64,
        min_amount_a: u64,
        min_amount_b: u64,
    ) -> Result<()> {
        instructions::add_liquidity(ctx, amount_a, amount_b, min_amount_a, min_amount_b)
    }

    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        liquidity: u64,
        min_amount_a: u64,
        min_amount_b: u64,
    ) -> Result<()> {
        instructions::remove_liquidity(ctx, liquidity, min_amount_a, min_amount_b)
    }

    pub fn swap(
        ctx: Context<Swap>,
        amount_in: u64,
        min_amount_out: u64,
        output_is_b: bool,
    ) -> Result<()> {
        instructions::swap(ctx, amount_in, min_amount_out, output_is_b)
    }
}
