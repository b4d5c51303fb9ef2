use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

/// Updates the SOL/USD reference used to convert payments.
pub fn set_quote_price(ctx: Context<SetQuotePrice>, quote_price_usd: u64) -> Result<()> {
    require!(quote_price_usd > 0, SaleError::InvalidConfig);

    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);

    let old_price = cfg.quote_price_usd;
    cfg.quote_price_usd = quote_price_usd;

    emit!(QuotePriceSet {
        old_price,
        new_price: quote_price_usd,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetQuotePrice<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct QuotePriceSet {
    pub old_price: u64,
    pub new_price: u64,
}
