//! Program-wide constants.

/// Seed prefix for per-depositor ledger entries: `[USER_BALANCE_SEED, presale, depositor]`.
pub const USER_BALANCE_SEED: &[u8] = b"user_balance";

/// Anchor account discriminator length, prepended to every `#[account]` record.
pub const DISCRIMINATOR_LEN: usize = 8;
