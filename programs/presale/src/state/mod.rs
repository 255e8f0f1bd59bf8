pub mod presale;
pub mod user_balance;

pub use presale::*;
pub use user_balance::*;
