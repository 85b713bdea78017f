use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::constants::{LP_MINT_SEED, POOL_SEED};
use crate::events::LiquidityAdded;
use crate::logic::liquidity;
use crate::state::Pool;

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
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

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub mint_a: Account<'info, Mint>,
    pub mint_b: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [
            pool.admin.as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            LP_MINT_SEED,
        ],
        bump,
    )]
    pub lp_mint: Account<'info, Mint>,

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
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp: Account<'info, TokenAccount>,

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
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn add_liquidity(
    ctx: Context<AddLiquidity>,
    amount_a: u64,
    amount_b: u64,
    min_amount_a: u64,
    min_amount_b: u64,
) -> Result<()> {
    // Mirrored state, re-read this instruction. All validation happens on the
    // quote before any transfer is issued.
    let reserve_a = ctx.accounts.pool_vault_a.amount;
    let reserve_b = ctx.accounts.pool_vault_b.amount;
    let lp_supply = ctx.accounts.lp_mint.supply;

    let quote = liquidity::deposit(
        amount_a,
        amount_b,
        min_amount_a,
        min_amount_b,
        reserve_a,
        reserve_b,
        lp_supply,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_account_a.to_account_info(),
                to: ctx.accounts.pool_vault_a.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        quote.amount_a,
    )?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_account_b.to_account_info(),
                to: ctx.accounts.pool_vault_b.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        quote.amount_b,
    )?;

    let pool = &ctx.accounts.pool;
    let authority_seeds = &[
        pool.admin.as_ref(),
        pool.mint_a.as_ref(),
        pool.mint_b.as_ref(),
        POOL_SEED,
        &[pool.bump],
    ];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.lp_mint.to_account_info(),
                to: ctx.accounts.depositor_lp.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            &[&authority_seeds[..]],
        ),
        quote.shares,
    )?;

    emit!(LiquidityAdded {
        pool: ctx.accounts.pool.key(),
        depositor: ctx.accounts.depositor.key(),
        amount_a: quote.amount_a,
        amount_b: quote.amount_b,
        shares_minted: quote.shares,
    });

    Ok(())
}
