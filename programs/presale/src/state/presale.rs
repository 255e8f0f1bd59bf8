use anchor_lang::prelude::*;

/// Escrow record for one presale instance.
///
/// The account address is the custody of pooled lamports; `admin` is the
/// authorization subject allowed to sweep them. They are different roles
/// that happen to share one account.
#[account]
pub struct Presale {
    /// Withdraw authority, bound once at initialize.
    pub admin: Pubkey,
    /// Sum of all live depositor `amount`s for this presale.
    pub total_deposits: u64,
}

impl Presale {
    pub const SIZE: usize =
        32 + // admin
        8;   // total_deposits

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn authority(&self) -> &Pubkey {
        &self.admin
    }
}
