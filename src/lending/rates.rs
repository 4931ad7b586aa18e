//! Interest rate table and accrual arithmetic
//!
//! Rates are fixed at position open from a four-tier table keyed by the
//! agreed term. Accrual uses integer floor division throughout; truncation
//! is biased in the protocol's favor and must not be rounded up.

use odra::prelude::*;
use super::errors::LendingError;

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;
/// Basis point denominator
pub const BASIS_POINTS: u64 = 10_000;
/// Days used for annualized rates
pub const DAYS_PER_YEAR: u64 = 365;

/// Which side of the pool a position sits on
#[odra::odra_type]
pub enum PositionRole {
    /// Deposits vGold to earn yield
    Lender,
    /// Posts collateral to mint vGold
    Borrower,
}

/// Annual interest rate in basis points for a term, per role.
///
/// Lender tiers: <=30d 4%, <=60d 5.5%, <=90d 7%, else 10%.
/// Borrower tiers: <=30d 6%, <=60d 7.5%, <=90d 9%, else 12%.
pub fn rate_for(duration_days: u64, role: PositionRole) -> u64 {
    match role {
        PositionRole::Lender => {
            if duration_days <= 30 {
                400
            } else if duration_days <= 60 {
                550
            } else if duration_days <= 90 {
                700
            } else {
                1000
            }
        }
        PositionRole::Borrower => {
            if duration_days <= 30 {
                600
            } else if duration_days <= 60 {
                750
            } else if duration_days <= 90 {
                900
            } else {
                1200
            }
        }
    }
}

/// Interest accrued over whole days at an annual bps rate.
///
/// `principal * rate_bps * duration_days / (365 * 10000)`, floor division,
/// computed in u128 so the triple product cannot silently overflow.
pub fn accrued_interest(
    principal: u64,
    rate_bps: u64,
    duration_days: u64,
) -> Result<u64, LendingError> {
    let product = (principal as u128)
        .checked_mul(rate_bps as u128)
        .and_then(|p| p.checked_mul(duration_days as u128))
        .ok_or(LendingError::MathOverflow)?;
    let interest = product / ((DAYS_PER_YEAR * BASIS_POINTS) as u128);
    u64::try_from(interest).map_err(|_| LendingError::MathOverflow)
}

/// Whole days elapsed since `start_time`, capped at the agreed term.
///
/// Interest never accrues beyond the originally agreed duration; partial
/// days are truncated.
pub fn elapsed_days(now: u64, start_time: u64, duration_seconds: u64) -> u64 {
    let elapsed = now.saturating_sub(start_time);
    let capped = if elapsed > duration_seconds {
        duration_seconds
    } else {
        elapsed
    };
    capped / SECONDS_PER_DAY
}
