pub mod initialize_sale;
pub mod set_monthly_limits;
pub mod buy_tokens;
pub mod withdraw_tokens;
pub mod disable_vesting;
pub mod change_recipient;
pub mod change_authority;
pub mod set_purchase_limit;
pub mod set_wallet_daily_limit;
pub mod set_quote_price;
pub mod pause_sale;
pub mod resume_sale;

pub use initialize_sale::*;
pub use set_monthly_limits::*;
pub use buy_tokens::*;
pub use withdraw_tokens::*;
pub use disable_vesting::*;
pub use change_recipient::*;
pub use change_authority::*;
pub use set_purchase_limit::*;
pub use set_wallet_daily_limit::*;
pub use set_quote_price::*;
pub use pause_sale::*;
pub use resume_sale::*;
