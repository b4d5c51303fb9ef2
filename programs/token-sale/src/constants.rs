//! Program-wide constants.

use anchor_lang::prelude::*;

/// PDA seed for the per-sale vesting ledger.
#[constant]
pub const VESTING_LEDGER_SEED: &[u8] = b"vesting_ledger";

/// PDA seed for the per-buyer purchase record.
#[constant]
pub const WALLET_PURCHASE_SEED: &[u8] = b"wallet_purchase";

/// PDA seed for the authority owning the token reserve.
#[constant]
pub const SALE_AUTHORITY_SEED: &[u8] = b"sale_authority";

/// Max checkpoints in a monthly schedule.
pub const MAX_SCHEDULE_LEN: usize = 16;

/// Average month length in seconds (~30.44 days).
pub const SECONDS_PER_MONTH: u64 = 2_629_743;

/// Length of the per-wallet purchase window.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// SOL has 9 decimal places.
pub const LAMPORTS_DECIMALS: u32 = 9;

/// USD prices are fixed-point with 6 decimal places (micro-USD).
pub const USD_PRICE_DECIMALS: u32 = 6;

/// Upper bound on mint decimals accepted at sale initialization.
pub const MAX_MINT_DECIMALS: u8 = 18;
