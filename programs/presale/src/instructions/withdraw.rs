use anchor_lang::prelude::*;

use crate::state::Presale;
use crate::utils::ledger;

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ledger::authorize_withdraw(&ctx.accounts.presale, &admin)?;

    let presale_ai = ctx.accounts.presale.to_account_info();
    let admin_ai = ctx.accounts.admin.to_account_info();

    // Rent-exempt minimum stays behind so the presale account survives the sweep.
    let reserve = Rent::get()?.minimum_balance(presale_ai.data_len());
    let amount = ledger::sweepable_lamports(presale_ai.lamports(), reserve);

    if amount > 0 {
        // Program-owned account: lamports can be moved directly, no CPI.
        let presale_after = ledger::debit_lamports(presale_ai.lamports(), amount)?;
        let admin_after = ledger::credit_lamports(admin_ai.lamports(), amount)?;
        **presale_ai.try_borrow_mut_lamports()? = presale_after;
        **admin_ai.try_borrow_mut_lamports()? = admin_after;
    }

    let previous_total_deposits = ledger::settle_withdraw(&mut ctx.accounts.presale);

    emit!(Withdrawn {
        presale: ctx.accounts.presale.key(),
        admin,
        amount,
        previous_total_deposits,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[event]
pub struct Withdrawn {
    pub presale: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub previous_total_deposits: u64,
}
