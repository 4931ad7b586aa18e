//! Lending Pool - Position ledger and public operation surface
//!
//! Owns every lending and borrowing position plus the pool aggregates, and
//! coordinates the collaborator contracts:
//! - vGold token for principal movement (transfer in/out, mint, burn)
//! - Collateral vault for base-currency collateral escrow
//! - Price oracle (wired for collateral pricing follow-ups)
//!
//! Every entrypoint is atomic: any failed check or collaborator call reverts
//! the whole operation, so the pool totals always equal the sums over the
//! currently active positions.

use odra::prelude::*;
use odra::ContractRef;
use super::collateral::{liquidation_payout, required_collateral};
use super::errors::LendingError;
use super::events::*;
use super::rates::{accrued_interest, elapsed_days, rate_for, PositionRole, SECONDS_PER_DAY};
use crate::payment::CollateralVaultContractRef;
use crate::token::VGoldTokenContractRef;

/// Lifecycle of a position. Closed and Liquidated are terminal.
#[odra::odra_type]
pub enum PositionStatus {
    /// Position is open and accruing interest
    Active,
    /// Repaid or claimed
    Closed,
    /// Seized by a liquidator
    Liquidated,
}

/// A lending or borrowing position
#[odra::odra_type]
pub struct Position {
    /// Position owner
    pub account: Address,
    /// Principal in smallest vGold units
    pub principal: u64,
    /// Base-currency collateral; zero for lender positions
    pub collateral: u64,
    /// Open time in seconds since epoch
    pub start_time: u64,
    /// Agreed term, fixed at open
    pub duration_seconds: u64,
    /// Interest rate fixed at open (basis points)
    pub interest_rate_bps: u64,
    /// Current lifecycle state
    pub status: PositionStatus,
}

impl Position {
    fn is_active(&self) -> bool {
        matches!(self.status, PositionStatus::Active)
    }
}

/// Lending Pool contract
#[odra::module]
pub struct LendingPool {
    /// Manager address
    manager: Var<Address>,
    /// Treasury address (receives liquidation penalties left in escrow)
    treasury: Var<Address>,
    /// vGold token address
    vgold_token: Var<Address>,
    /// Collateral vault address
    collateral_vault: Var<Address>,
    /// Price oracle address
    price_oracle: Var<Address>,
    /// Minimum collateral ratio in percent
    min_collateral_ratio: Var<u64>,
    /// Liquidation threshold in percent
    liquidation_threshold: Var<u64>,
    /// Liquidator discount in basis points
    liquidation_discount_bps: Var<u64>,
    /// Sum of principal over active lender positions
    total_lent: Var<u64>,
    /// Sum of principal over active borrower positions
    total_borrowed: Var<u64>,
    /// Sum of collateral over active borrower positions
    total_collateral: Var<u64>,
    /// Lender positions by account
    lend_positions: Mapping<Address, Position>,
    /// Borrower positions by account
    borrow_positions: Mapping<Address, Position>,
}

#[odra::module]
impl LendingPool {
    /// Initialize the pool with its collaborator addresses
    pub fn init(
        &mut self,
        vgold_token: Address,
        collateral_vault: Address,
        price_oracle: Address,
    ) {
        let caller = self.env().caller();

        self.manager.set(caller);
        self.treasury.set(caller);
        self.vgold_token.set(vgold_token);
        self.collateral_vault.set(collateral_vault);
        self.price_oracle.set(price_oracle);

        self.min_collateral_ratio.set(150);
        self.liquidation_threshold.set(120);
        self.liquidation_discount_bps.set(500);

        self.total_lent.set(0);
        self.total_borrowed.set(0);
        self.total_collateral.set(0);
    }

    // ========================================
    // Lending
    // ========================================

    /// Lend vGold for a fixed term. Returns the projected total returns
    /// (principal plus interest at maturity).
    pub fn lend(&mut self, amount: u64, duration_days: u64) -> u64 {
        let caller = self.env().caller();

        if amount == 0 {
            self.env().revert(LendingError::InvalidAmount);
        }
        if let Some(existing) = self.lend_positions.get(&caller) {
            if existing.is_active() {
                self.env().revert(LendingError::PositionAlreadyActive);
            }
        }

        let interest_rate_bps = rate_for(duration_days, PositionRole::Lender);
        let duration_seconds = duration_days
            .checked_mul(SECONDS_PER_DAY)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);
        let interest = accrued_interest(amount, interest_rate_bps, duration_days)
            .unwrap_or_revert(&self.env());
        let total_returns = amount
            .checked_add(interest)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);

        // Pull the principal from the lender
        let mut token = self.vgold_token_ref();
        token.transfer_from(caller, Address::from(self.env().self_address()), amount);

        let timestamp = self.now();
        self.lend_positions.set(
            &caller,
            Position {
                account: caller,
                principal: amount,
                collateral: 0,
                start_time: timestamp,
                duration_seconds,
                interest_rate_bps,
                status: PositionStatus::Active,
            },
        );

        let total_lent = self.total_lent.get_or_default();
        self.total_lent.set(total_lent + amount);

        self.env().emit_event(Lent {
            lender: caller,
            amount,
            duration_days,
            interest_rate_bps,
            timestamp,
        });

        total_returns
    }

    /// Claim principal plus interest after the lending period has ended
    pub fn claim(&mut self) -> u64 {
        let caller = self.env().caller();

        let position = self
            .lend_positions
            .get(&caller)
            .unwrap_or_revert_with(&self.env(), LendingError::NoActivePosition);
        if !position.is_active() {
            self.env().revert(LendingError::NoActivePosition);
        }

        let now = self.now();
        if now.saturating_sub(position.start_time) < position.duration_seconds {
            self.env().revert(LendingError::LendingPeriodNotEnded);
        }

        // Interest over the full agreed term
        let interest = accrued_interest(
            position.principal,
            position.interest_rate_bps,
            position.duration_seconds / SECONDS_PER_DAY,
        )
        .unwrap_or_revert(&self.env());
        let total_returns = position
            .principal
            .checked_add(interest)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);

        let mut token = self.vgold_token_ref();
        token.transfer(caller, total_returns);

        self.lend_positions.set(
            &caller,
            Position {
                status: PositionStatus::Closed,
                ..position.clone()
            },
        );

        let total_lent = self.total_lent.get_or_default();
        self.total_lent.set(total_lent - position.principal);

        self.env().emit_event(Claimed {
            lender: caller,
            principal: position.principal,
            interest,
            timestamp: now,
        });

        total_returns
    }

    // ========================================
    // Borrowing
    // ========================================

    /// Borrow freshly minted vGold against base-currency collateral.
    /// Returns the projected total repayment at full term.
    pub fn borrow(&mut self, amount: u64, duration_days: u64, collateral: u64) -> u64 {
        let caller = self.env().caller();

        if amount == 0 {
            self.env().revert(LendingError::InvalidAmount);
        }
        if let Some(existing) = self.borrow_positions.get(&caller) {
            if existing.is_active() {
                self.env().revert(LendingError::PositionAlreadyActive);
            }
        }

        let min_ratio = self.min_collateral_ratio.get_or_default();
        let required = required_collateral(amount, min_ratio).unwrap_or_revert(&self.env());
        if collateral < required {
            self.env().revert(LendingError::InsufficientCollateral);
        }

        let interest_rate_bps = rate_for(duration_days, PositionRole::Borrower);
        let duration_seconds = duration_days
            .checked_mul(SECONDS_PER_DAY)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);
        let interest = accrued_interest(amount, interest_rate_bps, duration_days)
            .unwrap_or_revert(&self.env());
        let total_repay = amount
            .checked_add(interest)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);

        // Escrow the collateral, then mint the principal to the borrower
        let mut vault = self.collateral_vault_ref();
        vault.pay_in(caller, collateral);
        let mut token = self.vgold_token_ref();
        token.mint(caller, amount);

        let timestamp = self.now();
        self.borrow_positions.set(
            &caller,
            Position {
                account: caller,
                principal: amount,
                collateral,
                start_time: timestamp,
                duration_seconds,
                interest_rate_bps,
                status: PositionStatus::Active,
            },
        );

        let total_borrowed = self.total_borrowed.get_or_default();
        self.total_borrowed.set(total_borrowed + amount);
        let total_collateral = self.total_collateral.get_or_default();
        self.total_collateral.set(total_collateral + collateral);

        self.env().emit_event(Borrowed {
            borrower: caller,
            amount,
            collateral,
            duration_days,
            interest_rate_bps,
            timestamp,
        });

        total_repay
    }

    /// Repay an active loan and recover the collateral.
    /// Returns the collateral amount released back to the borrower.
    pub fn repay(&mut self) -> u64 {
        let caller = self.env().caller();

        let position = self
            .borrow_positions
            .get(&caller)
            .unwrap_or_revert_with(&self.env(), LendingError::NoActivePosition);
        if !position.is_active() {
            self.env().revert(LendingError::NoActivePosition);
        }

        let now = self.now();
        let days = elapsed_days(now, position.start_time, position.duration_seconds);
        let interest = accrued_interest(position.principal, position.interest_rate_bps, days)
            .unwrap_or_revert(&self.env());
        let total_repay = position
            .principal
            .checked_add(interest)
            .unwrap_or_revert_with(&self.env(), LendingError::MathOverflow);

        // Burn the repayment, then release the collateral
        let mut token = self.vgold_token_ref();
        token.burn(caller, total_repay);
        let mut vault = self.collateral_vault_ref();
        vault.pay_out(caller, position.collateral);

        self.borrow_positions.set(
            &caller,
            Position {
                status: PositionStatus::Closed,
                ..position.clone()
            },
        );

        let total_borrowed = self.total_borrowed.get_or_default();
        self.total_borrowed.set(total_borrowed - position.principal);
        let total_collateral = self.total_collateral.get_or_default();
        self.total_collateral.set(total_collateral - position.collateral);

        self.env().emit_event(Repaid {
            borrower: caller,
            principal: position.principal,
            interest,
            collateral_returned: position.collateral,
            timestamp: now,
        });

        position.collateral
    }

    // ========================================
    // Liquidation
    // ========================================

    /// Liquidate an active borrow position. The caller receives the
    /// collateral minus the liquidation discount; the remainder stays in
    /// escrow for the treasury.
    pub fn liquidate(&mut self, borrower: Address) -> u64 {
        let liquidator = self.env().caller();

        let position = self
            .borrow_positions
            .get(&borrower)
            .unwrap_or_revert_with(&self.env(), LendingError::NoActivePosition);
        if !position.is_active() {
            self.env().revert(LendingError::NoActivePosition);
        }

        let discount_bps = self.liquidation_discount_bps.get_or_default();
        let payout =
            liquidation_payout(position.collateral, discount_bps).unwrap_or_revert(&self.env());

        let mut vault = self.collateral_vault_ref();
        vault.pay_out(liquidator, payout);

        self.borrow_positions.set(
            &borrower,
            Position {
                status: PositionStatus::Liquidated,
                ..position.clone()
            },
        );

        let total_borrowed = self.total_borrowed.get_or_default();
        self.total_borrowed.set(total_borrowed - position.principal);
        let total_collateral = self.total_collateral.get_or_default();
        self.total_collateral.set(total_collateral - position.collateral);

        self.env().emit_event(Liquidated {
            borrower,
            liquidator,
            principal: position.principal,
            collateral: position.collateral,
            payout,
            timestamp: self.now(),
        });

        payout
    }

    // ========================================
    // View Functions
    // ========================================

    /// Read-only snapshot of a position. Fails if the account never opened
    /// a position of this role.
    pub fn get_position(&self, account: Address, role: PositionRole) -> Position {
        let positions = match role {
            PositionRole::Lender => &self.lend_positions,
            PositionRole::Borrower => &self.borrow_positions,
        };
        positions
            .get(&account)
            .unwrap_or_revert_with(&self.env(), LendingError::NoPosition)
    }

    /// Pool aggregates: (total_lent, total_borrowed, total_collateral)
    pub fn get_pool_stats(&self) -> (u64, u64, u64) {
        (
            self.total_lent.get_or_default(),
            self.total_borrowed.get_or_default(),
            self.total_collateral.get_or_default(),
        )
    }

    pub fn get_min_collateral_ratio(&self) -> u64 {
        self.min_collateral_ratio.get_or_default()
    }

    pub fn get_liquidation_threshold(&self) -> u64 {
        self.liquidation_threshold.get_or_default()
    }

    pub fn get_liquidation_discount_bps(&self) -> u64 {
        self.liquidation_discount_bps.get_or_default()
    }

    pub fn get_manager(&self) -> Address {
        self.manager.get_or_revert_with(LendingError::InvalidConfiguration)
    }

    pub fn get_treasury(&self) -> Address {
        self.treasury.get_or_revert_with(LendingError::InvalidConfiguration)
    }

    // ========================================
    // Admin Functions
    // ========================================

    /// Set the minimum collateral ratio (manager only, 110% floor)
    pub fn set_collateral_ratio(&mut self, new_ratio: u64) {
        self.only_manager();

        if new_ratio < 110 {
            self.env().revert(LendingError::RatioTooLow);
        }

        let old_ratio = self.min_collateral_ratio.get_or_default();
        self.min_collateral_ratio.set(new_ratio);

        let manager = self.manager.get_or_revert_with(LendingError::Unauthorized);
        self.env().emit_event(CollateralRatioUpdated {
            old_ratio,
            new_ratio,
            updated_by: manager,
        });
    }

    /// Set the liquidator discount (manager only, must stay below 100%)
    pub fn set_liquidation_discount(&mut self, new_discount_bps: u64) {
        self.only_manager();

        if new_discount_bps >= 10_000 {
            self.env().revert(LendingError::InvalidParameter);
        }

        let old_discount_bps = self.liquidation_discount_bps.get_or_default();
        self.liquidation_discount_bps.set(new_discount_bps);

        let manager = self.manager.get_or_revert_with(LendingError::Unauthorized);
        self.env().emit_event(LiquidationDiscountUpdated {
            old_discount_bps,
            new_discount_bps,
            updated_by: manager,
        });
    }

    /// Set the treasury address (manager only)
    pub fn set_treasury(&mut self, treasury: Address) {
        self.only_manager();
        self.treasury.set(treasury);

        let manager = self.manager.get_or_revert_with(LendingError::Unauthorized);
        self.env().emit_event(TreasuryUpdated {
            treasury,
            updated_by: manager,
        });
    }

    // ========================================
    // Internals
    // ========================================

    /// Block time in seconds
    fn now(&self) -> u64 {
        self.env().get_block_time() / 1000
    }

    fn vgold_token_ref(&self) -> VGoldTokenContractRef {
        let address = self
            .vgold_token
            .get_or_revert_with(LendingError::InvalidConfiguration);
        VGoldTokenContractRef::new(self.env(), address)
    }

    fn collateral_vault_ref(&self) -> CollateralVaultContractRef {
        let address = self
            .collateral_vault
            .get_or_revert_with(LendingError::InvalidConfiguration);
        CollateralVaultContractRef::new(self.env(), address)
    }

    fn only_manager(&self) {
        let caller = self.env().caller();
        let manager = self.manager.get_or_revert_with(LendingError::Unauthorized);
        if caller != manager {
            self.env().revert(LendingError::Unauthorized);
        }
    }
}
