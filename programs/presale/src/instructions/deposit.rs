use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::DISCRIMINATOR_LEN;
use crate::state::{Presale, UserBalance};
use crate::utils::ledger;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // Measured after init_if_needed has charged the user for the entry's rent.
    let reserve = Rent::get()?.minimum_balance(0);
    ledger::validate_deposit(
        amount,
        ctx.accounts.user.to_account_info().lamports(),
        reserve,
    )?;

    let (user_total, total_deposits) = ledger::apply_deposit(
        &mut ctx.accounts.presale,
        &mut ctx.accounts.user_balance,
        amount,
    )?;

    // The user account is System-owned, so the debit has to go through the System Program.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.presale.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        presale: ctx.accounts.presale.key(),
        depositor: ctx.accounts.user.key(),
        amount,
        user_total,
        total_deposits,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = DISCRIMINATOR_LEN + UserBalance::SIZE,
        seeds = [UserBalance::SEED, presale.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Deposited {
    pub presale: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub total_deposits: u64,
}
