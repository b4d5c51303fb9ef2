use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::instructions::pause_sale::SalePauseChanged;
use crate::state::SaleConfig;

pub fn resume_sale(ctx: Context<ResumeSale>) -> Result<()> {
    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);
    require!(cfg.paused, SaleError::SaleNotPaused);
    cfg.paused = false;
    emit!(SalePauseChanged {
        authority: cfg.authority,
        paused: false,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ResumeSale<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}
