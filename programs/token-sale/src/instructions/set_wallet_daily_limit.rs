use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

/// Caps what a single wallet may buy per day. `u64::MAX` lifts the cap.
pub fn set_wallet_daily_limit(ctx: Context<SetWalletDailyLimit>, new_limit: u64) -> Result<()> {
    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);

    let old_limit = cfg.wallet_daily_limit;
    cfg.wallet_daily_limit = new_limit;

    emit!(WalletDailyLimitSet {
        old_limit,
        new_limit,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetWalletDailyLimit<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct WalletDailyLimitSet {
    pub old_limit: u64,
    pub new_limit: u64,
}
