//! Events for the Lending Protocol

use odra::prelude::*;

/// Event emitted when vGold is lent into the pool
#[odra::event]
pub struct Lent {
    /// Address that lent
    pub lender: Address,
    /// Principal lent (smallest vGold unit)
    pub amount: u64,
    /// Agreed term in days
    pub duration_days: u64,
    /// Interest rate fixed at open (basis points)
    pub interest_rate_bps: u64,
    /// Timestamp of open (seconds)
    pub timestamp: u64,
}

/// Event emitted when vGold is borrowed against collateral
#[odra::event]
pub struct Borrowed {
    /// Address that borrowed
    pub borrower: Address,
    /// Principal borrowed
    pub amount: u64,
    /// Base-currency collateral posted
    pub collateral: u64,
    /// Agreed term in days
    pub duration_days: u64,
    /// Interest rate fixed at open (basis points)
    pub interest_rate_bps: u64,
    /// Timestamp of open (seconds)
    pub timestamp: u64,
}

/// Event emitted when a loan is repaid
#[odra::event]
pub struct Repaid {
    /// Address that repaid
    pub borrower: Address,
    /// Principal repaid
    pub principal: u64,
    /// Interest paid on top of principal
    pub interest: u64,
    /// Collateral returned to the borrower
    pub collateral_returned: u64,
    /// Timestamp of repayment (seconds)
    pub timestamp: u64,
}

/// Event emitted when lending returns are claimed
#[odra::event]
pub struct Claimed {
    /// Address that claimed
    pub lender: Address,
    /// Principal returned
    pub principal: u64,
    /// Interest earned
    pub interest: u64,
    /// Timestamp of the claim (seconds)
    pub timestamp: u64,
}

/// Event emitted when a borrow position is liquidated
#[odra::event]
pub struct Liquidated {
    /// Address of the borrower being liquidated
    pub borrower: Address,
    /// Address of the liquidator
    pub liquidator: Address,
    /// Outstanding principal written off
    pub principal: u64,
    /// Collateral seized from the position
    pub collateral: u64,
    /// Discounted payout sent to the liquidator
    pub payout: u64,
    /// Timestamp of liquidation (seconds)
    pub timestamp: u64,
}

/// Event emitted when the minimum collateral ratio changes
#[odra::event]
pub struct CollateralRatioUpdated {
    /// Old ratio (percent)
    pub old_ratio: u64,
    /// New ratio (percent)
    pub new_ratio: u64,
    /// Manager that changed it
    pub updated_by: Address,
}

/// Event emitted when the liquidation discount changes
#[odra::event]
pub struct LiquidationDiscountUpdated {
    /// Old discount (basis points)
    pub old_discount_bps: u64,
    /// New discount (basis points)
    pub new_discount_bps: u64,
    /// Manager that changed it
    pub updated_by: Address,
}

/// Event emitted when the treasury address changes
#[odra::event]
pub struct TreasuryUpdated {
    /// New treasury address
    pub treasury: Address,
    /// Manager that changed it
    pub updated_by: Address,
}
