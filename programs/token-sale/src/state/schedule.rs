//! Monthly unlock schedule: parallel `(checkpoint_timestamp, limit)` sequences.
//! - index i is month i; limit i is the slice unlocked once checkpoint i has passed
//! - limits are per-period caps, the schedule total is their sum

use crate::constants::MAX_SCHEDULE_LEN;
use crate::error::SaleError;

/// A validated schedule borrowed from instruction input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule<'a> {
    pub limits: &'a [u64],
    pub checkpoint_timestamps: &'a [u64],
    pub total_locked: u64,
}

impl<'a> Schedule<'a> {
    pub fn new(limits: &'a [u64], checkpoint_timestamps: &'a [u64]) -> Result<Self, SaleError> {
        if limits.len() != checkpoint_timestamps.len()
            || limits.is_empty()
            || limits.len() > MAX_SCHEDULE_LEN
        {
            return Err(SaleError::InvalidScheduleLength);
        }

        if checkpoint_timestamps.windows(2).any(|w| w[1] < w[0]) {
            return Err(SaleError::NonMonotonicSchedule);
        }

        let total_locked = limits.iter().try_fold(0u64, |acc, limit| {
            acc.checked_add(*limit).ok_or(SaleError::ArithmeticOverflow)
        })?;

        Ok(Self {
            limits,
            checkpoint_timestamps,
            total_locked,
        })
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}
