//! Escrow bookkeeping, independent of account I/O.
//! Every function either applies its whole effect or returns an error with
//! its inputs untouched; the instruction handlers own the lamport movement.

use anchor_lang::prelude::Pubkey;

use crate::error::PresaleError;
use crate::state::{Presale, UserBalance};

/// Bind `admin` to a fresh presale record.
pub fn initialize_presale(presale: &mut Presale, admin: Pubkey) -> Result<(), PresaleError> {
    if presale.is_initialized() {
        return Err(PresaleError::AlreadyInitialized);
    }
    // A Signer is never the default key; this guards direct callers of the engine.
    if admin == Pubkey::default() {
        return Err(PresaleError::InvalidAdmin);
    }
    presale.admin = admin;
    presale.total_deposits = 0;
    Ok(())
}

/// A depositor may drain to exactly zero or stay at or above `reserve`;
/// any balance in between is not rent exempt and would be rejected by the host.
pub fn validate_deposit(
    amount: u64,
    available_lamports: u64,
    reserve: u64,
) -> Result<(), PresaleError> {
    if amount == 0 {
        return Err(PresaleError::ZeroAmount);
    }
    if amount == available_lamports {
        return Ok(());
    }
    if amount > sweepable_lamports(available_lamports, reserve) {
        return Err(PresaleError::InsufficientFunds);
    }
    Ok(())
}

/// Credit `amount` to both the depositor entry and the presale total.
/// Returns `(user_total, total_deposits)` after the update.
pub fn apply_deposit(
    presale: &mut Presale,
    entry: &mut UserBalance,
    amount: u64,
) -> Result<(u64, u64), PresaleError> {
    if !presale.is_initialized() {
        return Err(PresaleError::Uninitialized);
    }
    let user_total = entry
        .amount
        .checked_add(amount)
        .ok_or(PresaleError::ArithmeticOverflow)?;
    let total_deposits = presale
        .total_deposits
        .checked_add(amount)
        .ok_or(PresaleError::ArithmeticOverflow)?;

    entry.amount = user_total;
    presale.total_deposits = total_deposits;
    Ok((user_total, total_deposits))
}

pub fn authorize_withdraw(presale: &Presale, caller: &Pubkey) -> Result<(), PresaleError> {
    if !presale.is_initialized() {
        return Err(PresaleError::Uninitialized);
    }
    if presale.authority() != caller {
        return Err(PresaleError::Unauthorized);
    }
    Ok(())
}

/// Lamports above the reserve that must stay in the custody account.
pub fn sweepable_lamports(held: u64, reserve: u64) -> u64 {
    held.saturating_sub(reserve)
}

/// Zero the pool total; returns what it was.
pub fn settle_withdraw(presale: &mut Presale) -> u64 {
    core::mem::take(&mut presale.total_deposits)
}

pub fn credit_lamports(balance: u64, amount: u64) -> Result<u64, PresaleError> {
    balance
        .checked_add(amount)
        .ok_or(PresaleError::ArithmeticOverflow)
}

pub fn debit_lamports(balance: u64, amount: u64) -> Result<u64, PresaleError> {
    balance
        .checked_sub(amount)
        .ok_or(PresaleError::ArithmeticOverflow)
}
