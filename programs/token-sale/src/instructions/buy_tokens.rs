use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SALE_AUTHORITY_SEED, VESTING_LEDGER_SEED, WALLET_PURCHASE_SEED};
use crate::error::SaleError;
use crate::state::{SaleConfig, VestingLedger, WalletPurchase};

/// Buys tokens for `sol_amount` lamports.
///
/// `timestamp` is caller supplied and only ever moves the unlock checkpoint
/// pointer forward. The per-wallet daily window runs on the cluster clock.
/// Every limit is checked before either transfer is issued.
pub fn buy_tokens(ctx: Context<BuyTokens>, sol_amount: u64, timestamp: u64) -> Result<()> {
    let cfg = &ctx.accounts.sale_config;
    require!(!cfg.paused, SaleError::SalePaused);

    let now = u64::try_from(Clock::get()?.unix_timestamp)
        .map_err(|_| SaleError::InvalidTimestamp)?;

    let token_amount = cfg.token_amount_for(sol_amount)?;
    let wallet_update = ctx.accounts.wallet_purchase.quote_purchase(
        token_amount,
        now,
        cfg.wallet_daily_limit,
    )?;
    let update = ctx
        .accounts
        .vesting_ledger
        .quote_purchase(token_amount, timestamp, cfg.token_limit)?;
    require!(
        ctx.accounts.reserve.amount >= token_amount,
        SaleError::InsufficientReserve
    );

    // Payment leg: buyer -> recipient.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
        ),
        sol_amount,
    )?;

    // Token leg: reserve -> buyer, signed by the sale authority PDA.
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
                to: ctx.accounts.buyer_token_account.to_account_info(),
                authority: ctx.accounts.sale_authority.to_account_info(),
            },
            signer_seeds,
        ),
        token_amount,
    )?;

    let buyer = ctx.accounts.buyer.key();
    let wp = &mut ctx.accounts.wallet_purchase;
    if !wp.is_initialized() {
        wp.wallet = buyer;
        wp.sale_config = sale_config_key;
        wp.bump = ctx.bumps.wallet_purchase;
    }
    wp.apply(&wallet_update);

    let ledger = &mut ctx.accounts.vesting_ledger;
    let newly_unlocked = update
        .advance
        .tokens_unlocked
        .saturating_sub(ledger.tokens_unlocked);
    ledger.apply(&update);

    if newly_unlocked > 0 {
        msg!(
            "checkpoint {} reached, {} tokens unlocked",
            ledger.last_checked_index,
            newly_unlocked
        );
    }

    emit!(TokensPurchased {
        sale_config: sale_config_key,
        buyer,
        sol_amount,
        token_amount,
        timestamp,
        wallet_total_purchased: wp.total_purchased,
        wallet_purchased_in_window: wp.purchased_in_window,
        tokens_sold: ledger.tokens_sold,
        tokens_unlocked: ledger.tokens_unlocked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        constraint = sale_config.token_mint == mint.key() @ SaleError::InvalidTokenMint,
        constraint = sale_config.recipient == recipient.key() @ SaleError::WrongRecipientAddress,
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

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + WalletPurchase::SIZE,
        seeds = [WALLET_PURCHASE_SEED, sale_config.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub wallet_purchase: Box<Account<'info, WalletPurchase>>,

    #[account(mut)]
    pub recipient: SystemAccount<'info>,

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
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensPurchased {
    pub sale_config: Pubkey,
    pub buyer: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub timestamp: u64,
    pub wallet_total_purchased: u64,
    pub wallet_purchased_in_window: u64,
    pub tokens_sold: u64,
    pub tokens_unlocked: u64,
}
