use anchor_lang::prelude::*;

use crate::constants::MAX_SCHEDULE_LEN;
use crate::error::SaleError;
use crate::state::Schedule;

/// Per-sale vesting ledger PDA.
///
/// Tracks how much of the monthly schedule has been unlocked and how much of the
/// unlocked supply has been claimed by buyers or withdrawn by the authority.
/// Transitions are computed as a [`LedgerUpdate`] against `&self` and only
/// written back with [`VestingLedger::apply`], so a rejected call never leaves a
/// partially updated ledger behind.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct VestingLedger {
    /// Sale this ledger belongs to.
    pub sale_config: Pubkey,
    /// Per-month unlock amounts (first `schedule_len` entries are live).
    pub limits: [u64; MAX_SCHEDULE_LEN],
    /// Unlock checkpoints, parallel to `limits`.
    pub checkpoint_timestamps: [u64; MAX_SCHEDULE_LEN],
    pub schedule_len: u8,
    /// Number of checkpoints already folded into `tokens_unlocked`.
    pub last_checked_index: u8,
    /// Cumulative unlocked supply; never exceeds `total_locked`.
    pub tokens_unlocked: u64,
    /// Sum of all buyer purchases.
    pub tokens_sold: u64,
    /// Sum of all authority withdrawals.
    pub tokens_withdrawn: u64,
    /// Cached `unlocked - sold - withdrawn`, refreshed on every write.
    pub tokens_available: u64,
    /// Sum of all schedule limits.
    pub total_locked: u64,
    /// Highest timestamp seen by a checkpoint advance.
    pub latest_timestamp: u64,
    pub is_vesting_enabled: bool,
    pub bump: u8,
}

impl VestingLedger {
    pub const SIZE: usize =
        32 +                    // sale_config
        8 * MAX_SCHEDULE_LEN +  // limits
        8 * MAX_SCHEDULE_LEN +  // checkpoint_timestamps
        1 +                     // schedule_len
        1 +                     // last_checked_index
        8 +                     // tokens_unlocked
        8 +                     // tokens_sold
        8 +                     // tokens_withdrawn
        8 +                     // tokens_available
        8 +                     // total_locked
        8 +                     // latest_timestamp
        1 +                     // is_vesting_enabled
        1;                      // bump

    pub fn is_initialized(&self) -> bool {
        self.sale_config != Pubkey::default()
    }

    /// First-time setup of a freshly created ledger. Vesting starts enabled.
    pub fn initialize(&mut self, sale_config: Pubkey, bump: u8) {
        self.sale_config = sale_config;
        self.bump = bump;
        self.is_vesting_enabled = true;
    }

    pub fn limits(&self) -> &[u64] {
        &self.limits[..self.schedule_len as usize]
    }

    pub fn checkpoint_timestamps(&self) -> &[u64] {
        &self.checkpoint_timestamps[..self.schedule_len as usize]
    }

    /// Replaces the schedule and resets the unlock accounting.
    ///
    /// Only allowed while nothing has been sold or withdrawn.
    pub fn set_schedule(&mut self, schedule: &Schedule) -> std::result::Result<(), SaleError> {
        if self.tokens_sold != 0 || self.tokens_withdrawn != 0 {
            return Err(SaleError::ScheduleLocked);
        }
        let len = schedule.len();

        self.limits = [0; MAX_SCHEDULE_LEN];
        self.checkpoint_timestamps = [0; MAX_SCHEDULE_LEN];
        self.limits[..len].copy_from_slice(schedule.limits);
        self.checkpoint_timestamps[..len].copy_from_slice(schedule.checkpoint_timestamps);
        self.schedule_len = u8::try_from(len).map_err(|_| SaleError::InvalidScheduleLength)?;

        self.total_locked = schedule.total_locked;
        self.tokens_unlocked = 0;
        self.tokens_withdrawn = 0;
        self.tokens_available = 0;
        self.last_checked_index = 0;
        self.latest_timestamp = 0;
        Ok(())
    }

    /// Irreversibly turns off monthly-limit enforcement for purchases.
    pub fn disable_vesting(&mut self) -> std::result::Result<(), SaleError> {
        if !self.is_vesting_enabled {
            return Err(SaleError::VestingAlreadyDisabled);
        }
        self.is_vesting_enabled = false;
        Ok(())
    }

    /// Recomputed `unlocked - sold - withdrawn`, floored at zero.
    pub fn available(&self) -> u64 {
        self.tokens_unlocked
            .saturating_sub(self.tokens_sold)
            .saturating_sub(self.tokens_withdrawn)
    }

    /// Folds every checkpoint at or before `now` into the unlocked total.
    ///
    /// The pointer only moves forward: a `now` older than an already passed
    /// checkpoint leaves the result equal to the current state.
    pub fn advance_checkpoints(&self, now: u64) -> std::result::Result<CheckpointAdvance, SaleError> {
        let len = (self.schedule_len as usize).min(MAX_SCHEDULE_LEN);
        let mut index = self.last_checked_index as usize;
        let mut unlocked = self.tokens_unlocked;

        while index < len && self.checkpoint_timestamps[index] <= now {
            unlocked = unlocked
                .checked_add(self.limits[index])
                .ok_or(SaleError::ArithmeticOverflow)?
                .min(self.total_locked);
            index += 1;
        }

        Ok(CheckpointAdvance {
            last_checked_index: u8::try_from(index).map_err(|_| SaleError::ArithmeticOverflow)?,
            tokens_unlocked: unlocked,
            latest_timestamp: self.latest_timestamp.max(now),
        })
    }

    /// Validates a purchase of `token_amount` at the caller supplied `timestamp`.
    pub fn quote_purchase(
        &self,
        token_amount: u64,
        timestamp: u64,
        token_limit: u64,
    ) -> std::result::Result<LedgerUpdate, SaleError> {
        if token_amount == 0 {
            return Err(SaleError::ZeroOrNegativeAmount);
        }
        let advance = self.advance_checkpoints(timestamp)?;

        let sold = self
            .tokens_sold
            .checked_add(token_amount)
            .ok_or(SaleError::ArithmeticOverflow)?;

        if self.is_vesting_enabled {
            if advance.last_checked_index == 0 {
                return Err(SaleError::SaleNotStarted);
            }
            let claimed = sold
                .checked_add(self.tokens_withdrawn)
                .ok_or(SaleError::ArithmeticOverflow)?;
            if claimed > advance.tokens_unlocked {
                return Err(SaleError::MonthlyLimitExceeded);
            }
        }

        if sold > token_limit || sold > self.total_locked {
            return Err(SaleError::SaleLimitExceeded);
        }

        Ok(LedgerUpdate {
            advance,
            tokens_sold: sold,
            tokens_withdrawn: self.tokens_withdrawn,
        })
    }

    /// Validates an authority withdrawal of `amount` as of `now`.
    pub fn quote_withdrawal(&self, amount: u64, now: u64) -> std::result::Result<LedgerUpdate, SaleError> {
        if amount == 0 {
            return Err(SaleError::ZeroOrNegativeAmount);
        }
        let advance = self.advance_checkpoints(now)?;

        let available = advance
            .tokens_unlocked
            .saturating_sub(self.tokens_sold)
            .saturating_sub(self.tokens_withdrawn);
        if amount > available {
            return Err(SaleError::InsufficientAvailable);
        }

        let withdrawn = self
            .tokens_withdrawn
            .checked_add(amount)
            .ok_or(SaleError::ArithmeticOverflow)?;

        Ok(LedgerUpdate {
            advance,
            tokens_sold: self.tokens_sold,
            tokens_withdrawn: withdrawn,
        })
    }

    /// Commits a previously quoted update.
    pub fn apply(&mut self, update: &LedgerUpdate) {
        self.last_checked_index = update.advance.last_checked_index;
        self.tokens_unlocked = update.advance.tokens_unlocked;
        self.latest_timestamp = update.advance.latest_timestamp;
        self.tokens_sold = update.tokens_sold;
        self.tokens_withdrawn = update.tokens_withdrawn;
        self.tokens_available = self.available();
    }
}

/// Result of walking the checkpoint pointer forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckpointAdvance {
    pub last_checked_index: u8,
    pub tokens_unlocked: u64,
    pub latest_timestamp: u64,
}

/// Ledger state after an accepted purchase or withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerUpdate {
    pub advance: CheckpointAdvance,
    pub tokens_sold: u64,
    pub tokens_withdrawn: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_MONTH;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use test_case::test_case;

    const T0: u64 = 1_735_689_600;
    const TOKEN: u64 = 1_000_000;

    fn ledger(limits: &[u64], ts: &[u64]) -> VestingLedger {
        let mut l = VestingLedger::default();
        l.initialize(Pubkey::new_unique(), 255);
        l.set_schedule(&Schedule::new(limits, ts).unwrap()).unwrap();
        l
    }

    fn monthly(limits: &[u64]) -> VestingLedger {
        let ts: Vec<u64> = (0..limits.len() as u64)
            .map(|m| T0 + m * SECONDS_PER_MONTH)
            .collect();
        ledger(limits, &ts)
    }

    fn buy(l: &mut VestingLedger, amount: u64, ts: u64) -> std::result::Result<(), SaleError> {
        let update = l.quote_purchase(amount, ts, u64::MAX)?;
        l.apply(&update);
        Ok(())
    }

    fn withdraw(l: &mut VestingLedger, amount: u64, ts: u64) -> std::result::Result<(), SaleError> {
        let update = l.quote_withdrawal(amount, ts)?;
        l.apply(&update);
        Ok(())
    }

    #[test]
    fn two_month_purchase_scenario() {
        let t1 = T0 + SECONDS_PER_MONTH;
        let mut l = ledger(&[300 * TOKEN, 200 * TOKEN], &[T0, t1]);

        buy(&mut l, 300 * TOKEN, T0).unwrap();
        assert_eq!(l.tokens_unlocked, 300 * TOKEN);
        assert_eq!(l.last_checked_index, 1);

        let before = l.clone();
        assert_eq!(
            buy(&mut l, TOKEN, T0).unwrap_err(),
            SaleError::MonthlyLimitExceeded
        );
        assert_eq!(l, before);

        buy(&mut l, TOKEN, t1).unwrap();
        assert_eq!(l.tokens_unlocked, 500 * TOKEN);
        buy(&mut l, 199 * TOKEN, t1).unwrap();
        assert_eq!(l.tokens_sold, 500 * TOKEN);
        assert_eq!(l.tokens_available, 0);
        assert_eq!(
            buy(&mut l, 1, t1 + 10 * SECONDS_PER_MONTH).unwrap_err(),
            SaleError::MonthlyLimitExceeded
        );
    }

    #[test_case(T0 - 1, 0, 0; "before first checkpoint")]
    #[test_case(T0, 1, 100; "at first checkpoint")]
    #[test_case(T0 + SECONDS_PER_MONTH - 1, 1, 100; "just before second")]
    #[test_case(T0 + SECONDS_PER_MONTH, 2, 300; "at second checkpoint")]
    #[test_case(T0 + 2 * SECONDS_PER_MONTH, 4, 1000; "equal checkpoints unlock together")]
    #[test_case(u64::MAX, 4, 1000; "far future unlocks everything")]
    fn advance_is_step_function(now: u64, index: u8, unlocked: u64) {
        let m = SECONDS_PER_MONTH;
        let l = ledger(&[100, 200, 300, 400], &[T0, T0 + m, T0 + 2 * m, T0 + 2 * m]);
        let adv = l.advance_checkpoints(now).unwrap();
        assert_eq!(adv.last_checked_index, index);
        assert_eq!(adv.tokens_unlocked, unlocked);
    }

    #[test]
    fn unlocked_tracks_max_observed_timestamp() {
        let limits = [10, 20, 30, 40, 50, 60];
        let mut l = monthly(&limits);
        let stamps = [T0, T0 + 3 * SECONDS_PER_MONTH, T0 + SECONDS_PER_MONTH, T0 + 4 * SECONDS_PER_MONTH];

        let mut max_seen = 0;
        for ts in stamps {
            buy(&mut l, 1, ts).unwrap();
            max_seen = max_seen.max(ts);
            let expected: u64 = limits
                .iter()
                .zip(l.checkpoint_timestamps())
                .filter(|(_, c)| **c <= max_seen)
                .map(|(v, _)| *v)
                .sum();
            assert_eq!(l.tokens_unlocked, expected);
            assert!(l.tokens_unlocked <= l.total_locked);
        }
    }

    #[test]
    fn earlier_timestamp_never_rewinds() {
        let mut l = monthly(&[100, 100, 100]);
        buy(&mut l, 10, T0 + 2 * SECONDS_PER_MONTH).unwrap();
        let (idx, unlocked) = (l.last_checked_index, l.tokens_unlocked);

        buy(&mut l, 10, T0).unwrap();
        assert_eq!(l.last_checked_index, idx);
        assert_eq!(l.tokens_unlocked, unlocked);
        assert_eq!(l.latest_timestamp, T0 + 2 * SECONDS_PER_MONTH);
    }

    #[test]
    fn purchase_before_first_checkpoint_is_rejected() {
        let mut l = monthly(&[100, 100]);
        assert_eq!(
            buy(&mut l, 1, T0 - 1).unwrap_err(),
            SaleError::SaleNotStarted
        );
        assert_eq!(l.last_checked_index, 0);
    }

    #[test_case(0, T0 - 1, 1, SaleError::SaleNotStarted; "wait for first checkpoint")]
    #[test_case(300, T0, 1, SaleError::MonthlyLimitExceeded; "first month sold out")]
    #[test_case(300, T0 + SECONDS_PER_MONTH - 1, 1, SaleError::MonthlyLimitExceeded; "still in first month")]
    #[test_case(300, T0 + SECONDS_PER_MONTH, 201, SaleError::MonthlyLimitExceeded; "over second month")]
    #[test_case(0, T0, 301, SaleError::MonthlyLimitExceeded; "over first month")]
    fn not_started_is_distinct_from_limit_exceeded(
        bought: u64,
        ts: u64,
        amount: u64,
        expected: SaleError,
    ) {
        let mut l = monthly(&[300, 200]);
        if bought > 0 {
            buy(&mut l, bought, T0).unwrap();
        }
        assert_eq!(l.quote_purchase(amount, ts, u64::MAX).unwrap_err(), expected);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let l = monthly(&[100]);
        assert_eq!(
            l.quote_purchase(0, T0, u64::MAX).unwrap_err(),
            SaleError::ZeroOrNegativeAmount
        );
        assert_eq!(
            l.quote_withdrawal(0, T0).unwrap_err(),
            SaleError::ZeroOrNegativeAmount
        );
    }

    #[test]
    fn token_limit_caps_cumulative_sales() {
        let mut l = monthly(&[1_000]);
        let update = l.quote_purchase(600, T0, 800).unwrap();
        l.apply(&update);
        assert_eq!(
            l.quote_purchase(201, T0, 800).unwrap_err(),
            SaleError::SaleLimitExceeded
        );
        assert!(l.quote_purchase(200, T0, 800).is_ok());
    }

    #[test]
    fn disabled_vesting_skips_monthly_check_but_keeps_caps() {
        let mut l = monthly(&[100, 100, 100]);
        l.disable_vesting().unwrap();
        assert_eq!(l.disable_vesting().unwrap_err(), SaleError::VestingAlreadyDisabled);

        // Nothing unlocked yet, still allowed.
        buy(&mut l, 250, T0 - 1).unwrap();
        assert_eq!(l.tokens_unlocked, 0);
        assert_eq!(l.tokens_available, 0);

        assert_eq!(
            buy(&mut l, 51, T0).unwrap_err(),
            SaleError::SaleLimitExceeded
        );
        assert_eq!(
            l.quote_purchase(10, T0, 255).unwrap_err(),
            SaleError::SaleLimitExceeded
        );
        buy(&mut l, 50, T0).unwrap();
        assert_eq!(l.tokens_sold, l.total_locked);
    }

    #[test]
    fn withdrawal_bounded_by_available() {
        let mut l = monthly(&[300, 200]);
        buy(&mut l, 120, T0).unwrap();
        assert_eq!(l.available(), 180);

        let before = l.clone();
        assert_eq!(
            withdraw(&mut l, 181, T0).unwrap_err(),
            SaleError::InsufficientAvailable
        );
        assert_eq!(l, before);

        withdraw(&mut l, 180, T0).unwrap();
        assert_eq!(l.tokens_available, 0);
        assert_eq!(l.tokens_withdrawn, 180);

        // Withdrawn supply is not sold again.
        assert_eq!(
            buy(&mut l, 1, T0).unwrap_err(),
            SaleError::MonthlyLimitExceeded
        );
    }

    #[test]
    fn withdrawal_sees_newly_vested_tokens() {
        let mut l = monthly(&[300, 200]);
        withdraw(&mut l, 300, T0).unwrap();
        assert_eq!(
            withdraw(&mut l, 1, T0 + SECONDS_PER_MONTH - 1).unwrap_err(),
            SaleError::InsufficientAvailable
        );
        withdraw(&mut l, 200, T0 + SECONDS_PER_MONTH).unwrap();
        assert_eq!(l.tokens_withdrawn, l.total_locked);
        assert_eq!(l.last_checked_index, 2);
    }

    #[test]
    fn available_saturates_when_sales_outran_schedule() {
        let mut l = monthly(&[100, 100]);
        l.disable_vesting().unwrap();
        buy(&mut l, 150, T0).unwrap();
        assert_eq!(l.available(), 0);
        assert_eq!(
            withdraw(&mut l, 1, T0).unwrap_err(),
            SaleError::InsufficientAvailable
        );
    }

    #[test]
    fn schedule_reset_allowed_only_before_activity() {
        let mut l = monthly(&[100, 100]);
        let update = LedgerUpdate {
            advance: l.advance_checkpoints(T0).unwrap(),
            tokens_sold: 0,
            tokens_withdrawn: 0,
        };
        l.apply(&update);
        assert_eq!(l.tokens_unlocked, 100);

        let limits = [50, 50, 50];
        let ts = [T0, T0 + 1, T0 + 2];
        l.set_schedule(&Schedule::new(&limits, &ts).unwrap()).unwrap();
        assert_eq!(l.tokens_unlocked, 0);
        assert_eq!(l.last_checked_index, 0);
        assert_eq!(l.total_locked, 150);
        assert_eq!(l.limits(), &limits);
        assert_eq!(l.limits[3..], [0; MAX_SCHEDULE_LEN - 3]);

        buy(&mut l, 10, T0).unwrap();
        let before = l.clone();
        assert_eq!(
            l.set_schedule(&Schedule::new(&limits, &ts).unwrap()).unwrap_err(),
            SaleError::ScheduleLocked
        );
        assert_eq!(l, before);
    }

    #[test]
    fn schedule_reset_keeps_vesting_flag() {
        let mut l = monthly(&[100]);
        l.disable_vesting().unwrap();
        l.set_schedule(&Schedule::new(&[1, 2], &[T0, T0]).unwrap()).unwrap();
        assert!(!l.is_vesting_enabled);
    }

    #[test]
    fn concurrent_buyers_never_exceed_unlocked() {
        let limits = [5_000u64; 12];
        let shared = Arc::new(Mutex::new(monthly(&limits)));

        let handles: Vec<_> = (0..8u64)
            .map(|buyer| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    let mut bought = 0u64;
                    for step in 0..200u64 {
                        let ts = T0 + ((buyer + step) % 12) * SECONDS_PER_MONTH;
                        let amount = 37 + buyer * 11;
                        let mut l = shared.lock().unwrap();
                        if let Ok(update) = l.quote_purchase(amount, ts, u64::MAX) {
                            l.apply(&update);
                            bought += amount;
                        }
                        assert!(l.tokens_sold <= l.tokens_unlocked);
                    }
                    bought
                })
            })
            .collect();

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let l = shared.lock().unwrap();
        assert_eq!(total, l.tokens_sold);
        assert!(l.tokens_sold <= l.tokens_unlocked);
        assert!(l.tokens_unlocked <= l.total_locked);
        assert_eq!(l.tokens_available, l.tokens_unlocked - l.tokens_sold);
    }
}
