use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_MINT_DECIMALS, SALE_AUTHORITY_SEED};
use crate::error::SaleError;
use crate::state::SaleConfig;

pub fn initialize_sale(
    ctx: Context<InitializeSale>,
    token_price_usd: u64,
    quote_price_usd: u64,
    mint_decimals: u8,
    token_limit: u64,
) -> Result<()> {
    require!(token_price_usd > 0, SaleError::InvalidConfig);
    require!(quote_price_usd > 0, SaleError::InvalidConfig);
    require!(mint_decimals <= MAX_MINT_DECIMALS, SaleError::InvalidConfig);
    require!(
        mint_decimals == ctx.accounts.token_mint.decimals,
        SaleError::InvalidTokenMint
    );
    require!(
        ctx.accounts.recipient.key() != Pubkey::default(),
        SaleError::InvalidConfig
    );

    let cfg = &mut ctx.accounts.sale_config;
    cfg.authority = ctx.accounts.authority.key();
    cfg.sale_authority = ctx.accounts.sale_authority.key();
    cfg.sale_authority_bump = ctx.bumps.sale_authority;
    cfg.recipient = ctx.accounts.recipient.key();
    cfg.token_mint = ctx.accounts.token_mint.key();
    cfg.token_price_usd = token_price_usd;
    cfg.quote_price_usd = quote_price_usd;
    cfg.mint_decimals = mint_decimals;
    cfg.token_limit = token_limit;
    cfg.wallet_daily_limit = u64::MAX;
    cfg.paused = false;

    emit!(SaleInitialized {
        sale_config: cfg.key(),
        authority: cfg.authority,
        recipient: cfg.recipient,
        token_mint: cfg.token_mint,
        reserve: ctx.accounts.reserve.key(),
        token_price_usd,
        quote_price_usd,
        token_limit,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(init, payer = authority, space = 8 + SaleConfig::SIZE)]
    pub sale_config: Account<'info, SaleConfig>,

    pub recipient: SystemAccount<'info>,

    /// CHECK: data-less PDA that signs for the reserve.
    #[account(
        seeds = [SALE_AUTHORITY_SEED, sale_config.key().as_ref()],
        bump
    )]
    pub sale_authority: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = sale_authority,
    )]
    pub reserve: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct SaleInitialized {
    pub sale_config: Pubkey,
    pub authority: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub reserve: Pubkey,
    pub token_price_usd: u64,
    pub quote_price_usd: u64,
    pub token_limit: u64,
}
