use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleConfig;

pub fn change_recipient_account(ctx: Context<ChangeRecipient>, new_recipient: Pubkey) -> Result<()> {
    require!(new_recipient != Pubkey::default(), SaleError::InvalidConfig);

    let cfg = &mut ctx.accounts.sale_config;
    require_keys_eq!(ctx.accounts.authority.key(), cfg.authority, SaleError::Unauthorized);

    let old_recipient = cfg.recipient;
    cfg.recipient = new_recipient;

    emit!(RecipientChanged {
        old_recipient,
        new_recipient,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeRecipient<'info> {
    #[account(mut)]
    pub sale_config: Account<'info, SaleConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct RecipientChanged {
    pub old_recipient: Pubkey,
    pub new_recipient: Pubkey,
}
