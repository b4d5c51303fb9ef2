use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

pub fn set_purchase_limit(ctx: Context<SetPurchaseLimit>, new_limit: u64) -> Result<()> {
    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);

    let old_limit = cfg.token_limit;
    cfg.token_limit = new_limit;

    emit!(PurchaseLimitSet {
        old_limit,
        new_limit,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPurchaseLimit<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct PurchaseLimitSet {
    pub old_limit: u64,
    pub new_limit: u64,
}
