use anchor_lang::prelude::*;

/// One pool per (namespace, canonical mint pair). Reserves and share supply
/// are not stored here: the vault balances and the LP mint supply are the
/// authoritative mirrors, re-read at the start of every instruction.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Namespace this pool was created under
    pub amm: Pubkey,
    /// Namespace administrator; first component of the pool's seeds
    pub admin: Pubkey,
    /// Reserve mint A (byte-order smaller of the pair, fixed at creation)
    pub mint_a: Pubkey,
    /// Reserve mint B
    pub mint_b: Pubkey,
    /// Liquidity-share mint, authority is the pool itself
    pub lp_mint: Pubkey,
    /// Reserve vault for mint A, owned by the pool
    pub vault_a: Pubkey,
    /// Reserve vault for mint B, owned by the pool
    pub vault_b: Pubkey,
    /// Derivation proof; reused as signer seed when debiting pool vaults
    pub bump: u8,
}
