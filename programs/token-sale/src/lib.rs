use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("6LUVNKtbT9a86zoJRCgh8wKBNphcFexBe1uo353jS5mb");

#[program]
pub mod token_sale {
    use super::*;

    /// Creates the sale configuration and the reserve token account.
    /// Prices are micro-USD: `token_price_usd` per whole token, `quote_price_usd` per SOL.
    pub fn initialize_sale(
        ctx: Context<InitializeSale>,
        token_price_usd: u64,
        quote_price_usd: u64,
        mint_decimals: u8,
        token_limit: u64,
    ) -> Result<()> {
        instructions::initialize_sale::initialize_sale(
            ctx,
            token_price_usd,
            quote_price_usd,
            mint_decimals,
            token_limit,
        )
    }

    pub fn set_monthly_limits(
        ctx: Context<SetMonthlyLimits>,
        limits: Vec<u64>,
        checkpoint_timestamps: Vec<u64>,
    ) -> Result<()> {
        instructions::set_monthly_limits::set_monthly_limits(ctx, limits, checkpoint_timestamps)
    }

    pub fn buy_tokens(ctx: Context<BuyTokens>, sol_amount: u64, timestamp: u64) -> Result<()> {
        instructions::buy_tokens::buy_tokens(ctx, sol_amount, timestamp)
    }

    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw_tokens::withdraw_tokens(ctx, amount)
    }

    pub fn disable_vesting(ctx: Context<DisableVesting>) -> Result<()> {
        instructions::disable_vesting::disable_vesting(ctx)
    }

    pub fn change_recipient_account(
        ctx: Context<ChangeRecipient>,
        new_recipient: Pubkey,
    ) -> Result<()> {
        instructions::change_recipient::change_recipient_account(ctx, new_recipient)
    }

    pub fn change_config_authority(
        ctx: Context<ChangeAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::change_authority::change_config_authority(ctx, new_authority)
    }

    pub fn set_purchase_limit(ctx: Context<SetPurchaseLimit>, new_limit: u64) -> Result<()> {
        instructions::set_purchase_limit::set_purchase_limit(ctx, new_limit)
    }

    pub fn set_wallet_daily_limit(
        ctx: Context<SetWalletDailyLimit>,
        new_limit: u64,
    ) -> Result<()> {
        instructions::set_wallet_daily_limit::set_wallet_daily_limit(ctx, new_limit)
    }

    pub fn set_quote_price(ctx: Context<SetQuotePrice>, quote_price_usd: u64) -> Result<()> {
        instructions::set_quote_price::set_quote_price(ctx, quote_price_usd)
    }

    pub fn pause_sale(ctx: Context<PauseSale>) -> Result<()> {
        instructions::pause_sale::pause_sale(ctx)
    }

    pub fn resume_sale(ctx: Context<ResumeSale>) -> Result<()> {
        instructions::resume_sale::resume_sale(ctx)
    }
}
