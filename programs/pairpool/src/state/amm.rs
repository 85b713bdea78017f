use anchor_lang::prelude::*;

/// Administrator namespace. Holds no balances; pools are derived under it.
#[account]
#[derive(InitSpace)]
pub struct Amm {
    /// Identity allowed to create pools in this namespace
    pub admin: Pubkey,
    /// Derivation proof for the namespace address
    pub bump: u8,
}
