use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::utils::price;

/// Sale configuration, created once by `initialize_sale`.
#[account]
#[derive(Default, Debug)]
pub struct SaleConfig {
    /// Signs every configuration change and withdrawal.
    pub authority: Pubkey,
    /// Program PDA owning the token reserve.
    pub sale_authority: Pubkey,
    /// Receives buyer SOL.
    pub recipient: Pubkey,
    /// Mint of the token on sale.
    pub token_mint: Pubkey,
    /// Micro-USD per whole token.
    pub token_price_usd: u64,
    /// Micro-USD per SOL, the reference rate used for conversion.
    pub quote_price_usd: u64,
    /// Absolute cap on tokens ever sold (base units).
    pub token_limit: u64,
    /// Per-wallet cap on tokens bought within one day; `u64::MAX` disables it.
    pub wallet_daily_limit: u64,
    pub mint_decimals: u8,
    pub sale_authority_bump: u8,
    pub paused: bool,
}

impl SaleConfig {
    pub const SIZE: usize =
        32 + // authority
        32 + // sale_authority
        32 + // recipient
        32 + // token_mint
        8 +  // token_price_usd
        8 +  // quote_price_usd
        8 +  // token_limit
        8 +  // wallet_daily_limit
        1 +  // mint_decimals
        1 +  // sale_authority_bump
        1;   // paused

    /// Tokens (base units) bought by `lamports` at the configured prices.
    pub fn token_amount_for(&self, lamports: u64) -> std::result::Result<u64, SaleError> {
        price::tokens_for_lamports(
            lamports,
            self.quote_price_usd,
            self.token_price_usd,
            self.mint_decimals,
        )
    }
}
