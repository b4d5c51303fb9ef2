use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

pub fn pause_sale(ctx: Context<PauseSale>) -> Result<()> {
    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);
    require!(!cfg.paused, SaleError::SalePaused);
    cfg.paused = true;
    emit!(SalePauseChanged {
        authority: cfg.authority,
        paused: true,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PauseSale<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SalePauseChanged {
    pub authority: Pubkey,
    pub paused: bool,
}
