use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_LEN;
use crate::error::PresaleError;
use crate::state::Presale;
use crate::utils::ledger;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    // `init` already funds the account; re-asserted here for the engine's invariant.
    let presale_ai = ctx.accounts.presale.to_account_info();
    require!(
        ctx.accounts
            .rent
            .is_exempt(presale_ai.lamports(), presale_ai.data_len()),
        PresaleError::AllocationFailed
    );

    let admin = ctx.accounts.admin.key();
    let presale = &mut ctx.accounts.presale;
    ledger::initialize_presale(presale, admin)?;

    emit!(PresaleInitialized {
        presale: presale.key(),
        admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LEN + Presale::SIZE
    )]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PresaleInitialized {
    pub presale: Pubkey,
    pub admin: Pubkey,
}
