use anchor_lang::prelude::*;

/// Custom error codes for the presale escrow program.
#[error_code]
pub enum PresaleError {
    #[msg("Presale account is not initialized")]
    Uninitialized,

    #[msg("Presale account is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Deposit amount must be > 0")]
    ZeroAmount,

    #[msg("User has insufficient funds for this transaction")]
    InsufficientFunds,

    #[msg("Math overflow")]
    ArithmeticOverflow,

    #[msg("Presale account could not be funded to rent exemption")]
    AllocationFailed,

    #[msg("Invalid admin public key")]
    InvalidAdmin,
}
