use anchor_lang::prelude::*;

use crate::constants::VESTING_LEDGER_SEED;
use crate::error::SaleError;
use crate::state::{SaleConfig, VestingLedger};

pub fn disable_vesting(ctx: Context<DisableVesting>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.sale_config.authority,
        SaleError::Unauthorized
    );
    let ledger = &mut ctx.accounts.vesting_ledger;
    ledger.disable_vesting()?;

    msg!("vesting disabled, {} tokens sold so far", ledger.tokens_sold);
    emit!(VestingDisabled {
        sale_config: ctx.accounts.sale_config.key(),
        authority: ctx.accounts.authority.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DisableVesting<'info> {
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [VESTING_LEDGER_SEED, sale_config.key().as_ref()],
        bump = vesting_ledger.bump,
    )]
    pub vesting_ledger: Box<Account<'info, VestingLedger>>,

    pub authority: Signer<'info>,
}

#[event]
pub struct VestingDisabled {
    pub sale_config: Pubkey,
    pub authority: Pubkey,
}
