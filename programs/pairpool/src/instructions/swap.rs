use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::POOL_SEED;
use crate::events::SwapExecuted;
use crate::logic::swap::swap_quote;
use crate::state::Pool;

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(
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

    pub depositor: Signer<'info>,

    pub mint_a: Account<'info, Mint>,
    pub mint_b: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = pool,
    )]
    pub pool_vault_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = pool,
    )]
    pub pool_vault_b: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = depositor,
    )]
    pub depositor_account_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = depositor,
    )]
    pub depositor_account_b: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn swap(
    ctx: Context<Swap>,
    amount_in: u64,
    min_amount_out: u64,
    output_is_b: bool,
) -> Result<()> {
    // `output_is_b` means A is paid in and B is paid out.
    let (reserve_in, reserve_out) = if output_is_b {
        (
            ctx.accounts.pool_vault_a.amount,
            ctx.accounts.pool_vault_b.amount,
        )
    } else {
        (
            ctx.accounts.pool_vault_b.amount,
            ctx.accounts.pool_vault_a.amount,
        )
    };

    let amount_out = swap_quote(amount_in, min_amount_out, reserve_in, reserve_out)?;

    let (user_in, vault_in, vault_out, user_out) = if output_is_b {
        (
            ctx.accounts.depositor_account_a.to_account_info(),
            ctx.accounts.pool_vault_a.to_account_info(),
            ctx.accounts.pool_vault_b.to_account_info(),
            ctx.accounts.depositor_account_b.to_account_info(),
        )
    } else {
        (
            ctx.accounts.depositor_account_b.to_account_info(),
            ctx.accounts.pool_vault_b.to_account_info(),
            ctx.accounts.pool_vault_a.to_account_info(),
            ctx.accounts.depositor_account_a.to_account_info(),
        )
    };

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: user_in,
                to: vault_in,
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount_in,
    )?;

    let pool = &ctx.accounts.pool;
    let authority_seeds = &[
        pool.admin.as_ref(),
        pool.mint_a.as_ref(),
        pool.mint_b.as_ref(),
        POOL_SEED,
        &[pool.bump],
    ];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: vault_out,
                to: user_out,
                authority: ctx.accounts.pool.to_account_info(),
            },
            &[&authority_seeds[..]],
        ),
        amount_out,
    )?;

    emit!(SwapExecuted {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.depositor.key(),
        amount_in,
        amount_out,
        output_is_b,
    });

    Ok(())
}
