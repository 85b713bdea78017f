use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{LP_MINT_DECIMALS, LP_MINT_SEED, POOL_SEED};
use crate::error::AmmError;
use crate::events::PoolCreated;
use crate::state::{Amm, Pool};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        seeds = [amm.admin.as_ref()],
        bump = amm.bump,
        has_one = admin @ AmmError::Unauthorized,
    )]
    pub amm: Account<'info, Amm>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// Byte-order smaller mint of the pair. Equal or unsorted pairs are
    /// rejected so only one pool address exists per logical pair.
    pub mint_a: Account<'info, Mint>,

    #[account(constraint = mint_a.key() < mint_b.key() @ AmmError::InvalidPair)]
    pub mint_b: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = 8 + Pool::INIT_SPACE,
        seeds = [
            amm.admin.as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            POOL_SEED,
        ],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    /// Liquidity-share mint, authority held by the pool address itself
    #[account(
        init,
        payer = admin,
        seeds = [
            amm.admin.as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            LP_MINT_SEED,
        ],
        bump,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.amm = ctx.accounts.amm.key();
    pool.admin = ctx.accounts.amm.admin;
    pool.mint_a = ctx.accounts.mint_a.key();
    pool.mint_b = ctx.accounts.mint_b.key();
    pool.lp_mint = ctx.accounts.lp_mint.key();
    pool.vault_a = Pubkey::default();
    pool.vault_b = Pubkey::default();
    pool.bump = ctx.bumps.pool;

    emit!(PoolCreated {
        pool: pool.key(),
        amm: pool.amm,
        mint_a: pool.mint_a,
        mint_b: pool.mint_b,
        lp_mint: pool.lp_mint,
    });

    Ok(())
}
