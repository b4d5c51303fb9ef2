use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::error::SaleError;

/// Per-buyer purchase record, created lazily on the first buy.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct WalletPurchase {
    pub wallet: Pubkey,
    pub sale_config: Pubkey,
    /// Lifetime tokens bought by `wallet` in this sale.
    pub total_purchased: u64,
    /// Tokens bought since the current daily window opened.
    pub purchased_in_window: u64,
    /// Cluster time of the most recent purchase.
    pub last_purchase_timestamp: u64,
    pub bump: u8,
}

impl WalletPurchase {
    pub const SIZE: usize =
        32 + // wallet
        32 + // sale_config
        8 +  // total_purchased
        8 +  // purchased_in_window
        8 +  // last_purchase_timestamp
        1;   // bump

    pub fn is_initialized(&self) -> bool {
        self.wallet != Pubkey::default()
    }

    /// Checks `token_amount` against the wallet's daily cap as of `now`.
    ///
    /// The window restarts once more than a day has passed since the last
    /// purchase. A clock that moved backwards keeps the current window.
    pub fn quote_purchase(
        &self,
        token_amount: u64,
        now: u64,
        daily_limit: u64,
    ) -> std::result::Result<WalletUpdate, SaleError> {
        let window_expired = now.saturating_sub(self.last_purchase_timestamp) > SECONDS_PER_DAY;
        let in_window = if window_expired { 0 } else { self.purchased_in_window };

        let purchased_in_window = in_window
            .checked_add(token_amount)
            .ok_or(SaleError::ArithmeticOverflow)?;
        if purchased_in_window > daily_limit {
            return Err(SaleError::PurchaseLimitExceeded);
        }

        Ok(WalletUpdate {
            total_purchased: self
                .total_purchased
                .checked_add(token_amount)
                .ok_or(SaleError::ArithmeticOverflow)?,
            purchased_in_window,
            last_purchase_timestamp: now.max(self.last_purchase_timestamp),
        })
    }

    pub fn apply(&mut self, update: &WalletUpdate) {
        self.total_purchased = update.total_purchased;
        self.purchased_in_window = update.purchased_in_window;
        self.last_purchase_timestamp = update.last_purchase_timestamp;
    }
}

/// Wallet record after an accepted purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalletUpdate {
    pub total_purchased: u64,
    pub purchased_in_window: u64,
    pub last_purchase_timestamp: u64,
}
