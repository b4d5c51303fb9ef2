use anchor_lang::prelude::*;

use crate::constants::VESTING_LEDGER_SEED;
use crate::error::SaleError;
use crate::state::{SaleConfig, Schedule, VestingLedger};

pub fn set_monthly_limits(
    ctx: Context<SetMonthlyLimits>,
    limits: Vec<u64>,
    checkpoint_timestamps: Vec<u64>,
) -> Result<()> {
    let sale_config_key = ctx.accounts.sale_config.key();
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.sale_config.authority,
        SaleError::Unauthorized
    );

    let schedule = Schedule::new(&limits, &checkpoint_timestamps)?;

    let ledger = &mut ctx.accounts.vesting_ledger;
    if !ledger.is_initialized() {
        ledger.initialize(sale_config_key, ctx.bumps.vesting_ledger);
    }
    require_keys_eq!(ledger.sale_config, sale_config_key, SaleError::WrongSaleConfig);
    ledger.set_schedule(&schedule)?;
    let total_locked = schedule.total_locked;

    msg!(
        "schedule set: {} checkpoints, {} tokens locked",
        schedule.len(),
        total_locked
    );

    emit!(MonthlyLimitsSet {
        sale_config: sale_config_key,
        limits,
        checkpoint_timestamps,
        total_locked,
        is_vesting_enabled: ledger.is_vesting_enabled,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetMonthlyLimits<'info> {
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + VestingLedger::SIZE,
        seeds = [VESTING_LEDGER_SEED, sale_config.key().as_ref()],
        bump
    )]
    pub vesting_ledger: Box<Account<'info, VestingLedger>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MonthlyLimitsSet {
    pub sale_config: Pubkey,
    pub limits: Vec<u64>,
    pub checkpoint_timestamps: Vec<u64>,
    pub total_locked: u64,
    pub is_vesting_enabled: bool,
}
