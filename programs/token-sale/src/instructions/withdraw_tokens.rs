use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SALE_AUTHORITY_SEED, VESTING_LEDGER_SEED};
use crate::error::SaleError;
use crate::state::{SaleConfig, VestingLedger};

/// Authority reclaims vested tokens that no buyer has claimed.
///
/// Checkpoints are advanced with the cluster clock, never a caller value.
pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let cfg = &ctx.accounts.sale_config;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        cfg.authority,
        SaleError::Unauthorized
    );

    let now = u64::try_from(Clock::get()?.unix_timestamp)
        .map_err(|_| SaleError::InvalidTimestamp)?;
    let update = ctx.accounts.vesting_ledger.quote_withdrawal(amount, now)?;
    require!(
        ctx.accounts.reserve.amount >= amount,
        SaleError::InsufficientReserve
    );

    let sale_config_key = cfg.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SALE_AUTHORITY_SEED,
        sale_config_key.as_ref(),
        &[cfg.sale_authority_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reserve.to_account_info(),
                to: ctx.accounts.authority_token_account.to_account_info(),
                authority: ctx.accounts.sale_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let ledger = &mut ctx.accounts.vesting_ledger;
    ledger.apply(&update);

    emit!(AdminWithdrawnTokens {
        sale_config: sale_config_key,
        authority: ctx.accounts.authority.key(),
        amount,
        tokens_withdrawn: ledger.tokens_withdrawn,
        tokens_available: ledger.tokens_available,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    #[account(
        constraint = sale_config.token_mint == mint.key() @ SaleError::InvalidTokenMint,
        constraint = sale_config.sale_authority == sale_authority.key() @ SaleError::WrongProgramAuthority,
    )]
    pub sale_config: Box<Account<'info, SaleConfig>>,

    #[account(
        mut,
        seeds = [VESTING_LEDGER_SEED, sale_config.key().as_ref()],
        bump = vesting_ledger.bump,
        constraint = vesting_ledger.sale_config == sale_config.key() @ SaleError::WrongSaleConfig,
    )]
    pub vesting_ledger: Box<Account<'info, VestingLedger>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: data-less PDA that signs for the reserve.
    #[account(
        seeds = [SALE_AUTHORITY_SEED, sale_config.key().as_ref()],
        bump = sale_config.sale_authority_bump
    )]
    pub sale_authority: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = sale_authority,
    )]
    pub reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AdminWithdrawnTokens {
    pub sale_config: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub tokens_withdrawn: u64,
    pub tokens_available: u64,
}
