use anchor_lang::prelude::*;

use crate::events::AmmCreated;
use crate::state::Amm;

#[derive(Accounts)]
pub struct CreateAmm<'info> {
    /// One namespace per administrator; re-creation fails on `init`.
    #[account(
        init,
        payer = admin,
        space = 8 + Amm::INIT_SPACE,
        seeds = [admin.key().as_ref()],
        bump,
    )]
    pub amm: Account<'info, Amm>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_amm(ctx: Context<CreateAmm>) -> Result<()> {
    let amm = &mut ctx.accounts.amm;
    amm.admin = ctx.accounts.admin.key();
    amm.bump = ctx.bumps.amm;

    emit!(AmmCreated {
        amm: amm.key(),
        admin: amm.admin,
    });

    Ok(())
}
