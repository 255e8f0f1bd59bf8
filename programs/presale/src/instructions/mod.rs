pub mod initialize;
pub mod deposit;
pub mod balance_of;
pub mod withdraw;

pub use initialize::*;
pub use deposit::*;
pub use balance_of::*;
pub use withdraw::*;
