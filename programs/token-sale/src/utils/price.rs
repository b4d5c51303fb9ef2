//! SOL to token conversion in fixed-point integer math.
//! - both USD prices carry `USD_PRICE_DECIMALS`, so the scale cancels out
//! - tokens = lamports * quote_price * 10^mint_decimals / (10^9 * token_price), floored

use crate::constants::{LAMPORTS_DECIMALS, MAX_MINT_DECIMALS};
use crate::error::SaleError;

pub fn tokens_for_lamports(
    lamports: u64,
    quote_price_usd: u64,
    token_price_usd: u64,
    mint_decimals: u8,
) -> Result<u64, SaleError> {
    if lamports == 0 {
        return Err(SaleError::ZeroOrNegativeAmount);
    }
    if token_price_usd == 0 || quote_price_usd == 0 || mint_decimals > MAX_MINT_DECIMALS {
        return Err(SaleError::InvalidConfig);
    }

    let token_scale = 10u128
        .checked_pow(mint_decimals as u32)
        .ok_or(SaleError::ArithmeticOverflow)?;
    let numerator = (lamports as u128)
        .checked_mul(quote_price_usd as u128)
        .ok_or(SaleError::ArithmeticOverflow)?
        .checked_mul(token_scale)
        .ok_or(SaleError::ArithmeticOverflow)?;
    let denominator = 10u128
        .pow(LAMPORTS_DECIMALS)
        .checked_mul(token_price_usd as u128)
        .ok_or(SaleError::ArithmeticOverflow)?;

    let tokens = u64::try_from(numerator / denominator).map_err(|_| SaleError::ArithmeticOverflow)?;
    if tokens == 0 {
        return Err(SaleError::ZeroOrNegativeAmount);
    }
    Ok(tokens)
}
