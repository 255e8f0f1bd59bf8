use anchor_lang::prelude::*;

use crate::state::{Presale, UserBalance};

/// Read-only; any party may query any depositor.
pub fn balance_of(ctx: Context<BalanceOf>) -> Result<u64> {
    let amount = ctx.accounts.user_balance.amount;
    msg!("User balance: {} ({})", amount, ctx.accounts.user.key());
    Ok(amount)
}

#[derive(Accounts)]
pub struct BalanceOf<'info> {
    pub presale: Account<'info, Presale>,

    /// CHECK: identity only, used to derive the ledger entry address.
    pub user: UncheckedAccount<'info>,

    #[account(
        seeds = [UserBalance::SEED, presale.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,
}
