//! Collateral sizing and liquidation payout policy
//!
//! Pure arithmetic over the protocol parameters. All divisions floor.

use super::errors::LendingError;
use super::rates::BASIS_POINTS;

/// Base-currency collateral required to borrow `principal` at the given
/// minimum ratio: `principal * min_ratio_pct / 100`.
pub fn required_collateral(principal: u64, min_ratio_pct: u64) -> Result<u64, LendingError> {
    if min_ratio_pct == 0 {
        return Err(LendingError::InvalidParameter);
    }
    let required = (principal as u128) * (min_ratio_pct as u128) / 100;
    u64::try_from(required).map_err(|_| LendingError::MathOverflow)
}

/// Discounted payout a liquidator receives for seized collateral:
/// `collateral * (10000 - discount_bps) / 10000`. The remainder stays with
/// the pool as the liquidation penalty.
pub fn liquidation_payout(collateral: u64, discount_bps: u64) -> Result<u64, LendingError> {
    if discount_bps >= BASIS_POINTS {
        return Err(LendingError::InvalidParameter);
    }
    let payout = (collateral as u128) * ((BASIS_POINTS - discount_bps) as u128)
        / (BASIS_POINTS as u128);
    // Payout never exceeds the collateral, so the narrowing cannot fail
    Ok(payout as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_collateral_at_default_ratio() {
        assert_eq!(required_collateral(1000, 150), Ok(1500));
        assert_eq!(required_collateral(0, 150), Ok(0));
        // Floor division
        assert_eq!(required_collateral(999, 150), Ok(1498));
    }

    #[test]
    fn required_collateral_rejects_zero_ratio() {
        assert_eq!(
            required_collateral(1000, 0),
            Err(LendingError::InvalidParameter)
        );
    }

    #[test]
    fn required_collateral_widens_before_multiplying() {
        assert_eq!(
            required_collateral(u64::MAX, 100),
            Ok(u64::MAX)
        );
        assert_eq!(
            required_collateral(u64::MAX, 150),
            Err(LendingError::MathOverflow)
        );
    }

    #[test]
    fn payout_applies_discount() {
        // 5% of 1500 = 75 retained by the pool
        assert_eq!(liquidation_payout(1500, 500), Ok(1425));
        assert_eq!(liquidation_payout(0, 500), Ok(0));
        assert_eq!(liquidation_payout(1500, 0), Ok(1500));
    }

    #[test]
    fn payout_rejects_full_discount() {
        assert_eq!(
            liquidation_payout(1500, 10_000),
            Err(LendingError::InvalidParameter)
        );
        assert_eq!(
            liquidation_payout(1500, 20_000),
            Err(LendingError::InvalidParameter)
        );
    }

    #[test]
    fn payout_never_exceeds_collateral() {
        for discount in [1, 500, 9_999] {
            let payout = liquidation_payout(u64::MAX, discount).unwrap();
            assert!(payout <= u64::MAX - 1);
        }
    }
}
