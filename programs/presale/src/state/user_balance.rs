use anchor_lang::prelude::*;

use crate::constants::USER_BALANCE_SEED;

/// Cumulative contribution of one depositor to one presale.
/// PDA: `[b"user_balance", presale, depositor]`.
#[account]
pub struct UserBalance {
    pub amount: u64,
}

impl UserBalance {
    pub const SIZE: usize = 8; // amount
    pub const SEED: &'static [u8] = USER_BALANCE_SEED;

    pub fn address(presale: &Pubkey, depositor: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, presale.as_ref(), depositor.as_ref()],
            &crate::ID,
        )
    }
}
