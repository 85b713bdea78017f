use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::POOL_SEED;
use crate::events::PoolVaultsCreated;
use crate::state::Pool;

/// Materializes the two reserve vaults as associated token accounts owned by
/// the pool address. A separate instruction so each account set stays small;
/// `init` fails if either vault already exists.
#[derive(Accounts)]
pub struct CreatePoolVaults<'info> {
    #[account(
        mut,
        seeds = [
            pool.admin.as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            POOL_SEED,
        ],
        bump = pool.bump,
        has_one = mint_a,
        has_one = mint_b,
    )]
    pub pool: Account<'info, Pool>,

    pub mint_a: Account<'info, Mint>,
    pub mint_b: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_a,
        associated_token::authority = pool,
    )]
    pub pool_vault_a: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_b,
        associated_token::authority = pool,
    )]
    pub pool_vault_b: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn create_pool_vaults(ctx: Context<CreatePoolVaults>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.vault_a = ctx.accounts.pool_vault_a.key();
    pool.vault_b = ctx.accounts.pool_vault_b.key();

    emit!(PoolVaultsCreated {
        pool: pool.key(),
        vault_a: pool.vault_a,
        vault_b: pool.vault_b,
    });

    Ok(())
}
