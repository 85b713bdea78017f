//! PDA derivation helpers
//!
//! Single source of truth for every address the program derives. Each helper
//! returns the address together with its bump, the proof later presented as
//! signer seeds when the pool debits its own accounts.

use anchor_lang::prelude::*;

use crate::constants::{LP_MINT_SEED, POOL_SEED};

/// Sort a mint pair into canonical byte order. Both input orders of the same
/// logical pair derive the same pool, so a duplicate surfaces as an
/// already-initialized address rather than a second pool.
pub fn canonical_pair(mint_x: Pubkey, mint_y: Pubkey) -> (Pubkey, Pubkey) {
    if mint_x < mint_y {
        (mint_x, mint_y)
    } else {
        (mint_y, mint_x)
    }
}

/// Derive the namespace address for an administrator
pub fn derive_amm_address(admin: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[admin.as_ref()], program_id)
}

/// Derive the pool address for a namespace and mint pair (any order)
pub fn derive_pool_address(
    admin: &Pubkey,
    mint_x: Pubkey,
    mint_y: Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    let (mint_a, mint_b) = canonical_pair(mint_x, mint_y);
    Pubkey::find_program_address(
        &[
            admin.as_ref(),
            mint_a.as_ref(),
            mint_b.as_ref(),
            POOL_SEED,
        ],
        program_id,
    )
}

/// Derive the liquidity-share mint address for a namespace and mint pair
pub fn derive_lp_mint_address(
    admin: &Pubkey,
    mint_x: Pubkey,
    mint_y: Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    let (mint_a, mint_b) = canonical_pair(mint_x, mint_y);
    Pubkey::find_program_address(
        &[
            admin.as_ref(),
            mint_a.as_ref(),
            mint_b.as_ref(),
            LP_MINT_SEED,
        ],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> (Pubkey, Pubkey, Pubkey, Pubkey) {
        (
            Pubkey::new_from_array([1; 32]),
            Pubkey::new_from_array([2; 32]),
            Pubkey::new_from_array([3; 32]),
            crate::ID,
        )
    }

    #[test]
    fn derivation_is_deterministic() {
        let (admin, x, y, pid) = keys();
        assert_eq!(
            derive_pool_address(&admin, x, y, &pid),
            derive_pool_address(&admin, x, y, &pid)
        );
        assert_eq!(
            derive_amm_address(&admin, &pid),
            derive_amm_address(&admin, &pid)
        );
    }

    #[test]
    fn pair_order_is_canonicalized() {
        let (admin, x, y, pid) = keys();
        assert_eq!(
            derive_pool_address(&admin, x, y, &pid).0,
            derive_pool_address(&admin, y, x, &pid).0
        );
        assert_eq!(
            derive_lp_mint_address(&admin, x, y, &pid).0,
            derive_lp_mint_address(&admin, y, x, &pid).0
        );
    }

    #[test]
    fn role_tags_separate_pool_and_lp_mint() {
        let (admin, x, y, pid) = keys();
        assert_ne!(
            derive_pool_address(&admin, x, y, &pid).0,
            derive_lp_mint_address(&admin, x, y, &pid).0
        );
    }

    #[test]
    fn distinct_admins_derive_distinct_pools() {
        let (admin, x, y, pid) = keys();
        let other = Pubkey::new_from_array([9; 32]);
        assert_ne!(
            derive_pool_address(&admin, x, y, &pid).0,
            derive_pool_address(&other, x, y, &pid).0
        );
    }
}
