pub mod sale_config;
pub mod schedule;
pub mod vesting_ledger;
pub mod wallet_purchase;

pub use sale_config::*;
pub use schedule::*;
pub use vesting_ledger::*;
pub use wallet_purchase::*;
