use anchor_lang::prelude::*;

/// Custom error codes for the token sale program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum SaleError {
    #[msg("Unauthorized: sale authority signature required")]
    Unauthorized,

    #[msg("Schedule arrays must be non-empty, of equal length and within bounds")]
    InvalidScheduleLength,

    #[msg("Schedule checkpoint timestamps must be non-decreasing")]
    NonMonotonicSchedule,

    #[msg("Amount must be greater than zero")]
    ZeroOrNegativeAmount,

    #[msg("Monthly limit exceeded")]
    MonthlyLimitExceeded,

    #[msg("Sale limit exceeded")]
    SaleLimitExceeded,

    #[msg("Insufficient tokens in the sale reserve")]
    InsufficientReserve,

    #[msg("Requested amount exceeds available tokens")]
    InsufficientAvailable,

    #[msg("Math overflow")]
    ArithmeticOverflow,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Token sale is currently paused")]
    SalePaused,

    #[msg("Token sale is not paused")]
    SaleNotPaused,

    #[msg("Schedule cannot be replaced after tokens were sold or withdrawn")]
    ScheduleLocked,

    #[msg("Vesting is already disabled")]
    VestingAlreadyDisabled,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Wrong recipient address for SOL transfer")]
    WrongRecipientAddress,

    #[msg("Wrong program sale authority")]
    WrongProgramAuthority,

    #[msg("Ledger does not belong to this sale")]
    WrongSaleConfig,

    #[msg("Sale has not started: first checkpoint not reached")]
    SaleNotStarted,

    #[msg("Wallet purchase limit for the current window exceeded")]
    PurchaseLimitExceeded,
}
