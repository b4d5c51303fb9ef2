use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

/// Hands the sale over; only `new_authority` can sign configuration calls afterwards.
pub fn change_config_authority(ctx: Context<ChangeAuthority>, new_authority: Pubkey) -> Result<()> {
    require!(new_authority != Pubkey::default(), SaleError::InvalidConfig);

    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);

    let old_authority = cfg.authority;
    cfg.authority = new_authority;

    emit!(ConfigAuthorityChanged {
        old_authority,
        new_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeAuthority<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct ConfigAuthorityChanged {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
