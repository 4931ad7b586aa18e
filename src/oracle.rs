//! Price Oracle - Manages gold price updates and validation
//!
//! Prices are quoted in micro base-currency units per smallest vGold unit.
//! A dedicated oracle account pushes bounded updates; the manager can push
//! an emergency update that bypasses the bounds.
use odra::prelude::*;
use crate::errors::OracleError;
use crate::events::{PriceBoundsUpdated, PriceUpdated};

/// Default gold price: 0.05 base units per vGold unit
pub const DEFAULT_PRICE: u64 = 50_000;
/// Default lower price bound
pub const DEFAULT_MIN_PRICE: u64 = 1_000;
/// Default upper price bound
pub const DEFAULT_MAX_PRICE: u64 = 1_000_000;

/// Price Oracle contract
#[odra::module]
pub struct PriceOracle {
    /// Current gold price
    current_price: Var<u64>,
    /// Previous gold price
    last_price: Var<u64>,
    /// Timestamp of the last update (seconds)
    price_update_time: Var<u64>,
    /// Number of price updates so far
    update_count: Var<u64>,
    /// Account allowed to push regular updates
    oracle_address: Var<Address>,
    /// Manager address
    manager: Var<Address>,
    /// Minimum accepted price
    min_price: Var<u64>,
    /// Maximum accepted price
    max_price: Var<u64>,
}

#[odra::module]
impl PriceOracle {
    /// Initialize the oracle with default price and bounds
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.current_price.set(DEFAULT_PRICE);
        self.last_price.set(DEFAULT_PRICE);
        self.price_update_time.set(self.now());
        self.update_count.set(0);
        self.oracle_address.set(caller);
        self.manager.set(caller);
        self.min_price.set(DEFAULT_MIN_PRICE);
        self.max_price.set(DEFAULT_MAX_PRICE);
    }

    /// Update the gold price (oracle only, bounds checked)
    pub fn update_price(&mut self, new_price: u64) {
        let caller = self.env().caller();
        let oracle = self.oracle_address.get_or_revert_with(OracleError::Unauthorized);
        if caller != oracle {
            self.env().revert(OracleError::Unauthorized);
        }

        if !self.validate_price(new_price) {
            self.env().revert(OracleError::PriceOutOfBounds);
        }

        self.apply_price(new_price);
    }

    /// Emergency price update bypassing the bounds (manager only)
    pub fn emergency_update(&mut self, new_price: u64) {
        self.only_manager();
        self.apply_price(new_price);
    }

    /// Get the current gold price
    pub fn get_current_price(&self) -> u64 {
        self.current_price.get_or_default()
    }

    /// Get price, last update time, and update count
    pub fn get_price_info(&self) -> (u64, u64, u64) {
        (
            self.current_price.get_or_default(),
            self.price_update_time.get_or_default(),
            self.update_count.get_or_default(),
        )
    }

    /// Check whether a price lies within the configured bounds
    pub fn validate_price(&self, price: u64) -> bool {
        price >= self.min_price.get_or_default() && price <= self.max_price.get_or_default()
    }

    /// Set the accepted price bounds (manager only)
    pub fn set_price_bounds(&mut self, min_price: u64, max_price: u64) {
        self.only_manager();

        if min_price == 0 || min_price >= max_price {
            self.env().revert(OracleError::InvalidBounds);
        }

        self.min_price.set(min_price);
        self.max_price.set(max_price);

        let manager = self.manager.get_or_revert_with(OracleError::Unauthorized);
        self.env().emit_event(PriceBoundsUpdated {
            min_price,
            max_price,
            updated_by: manager,
        });
    }

    /// Rotate the oracle account (manager only)
    pub fn set_oracle_address(&mut self, new_oracle: Address) {
        self.only_manager();
        self.oracle_address.set(new_oracle);
    }

    fn apply_price(&mut self, new_price: u64) {
        let old_price = self.current_price.get_or_default();
        self.last_price.set(old_price);
        self.current_price.set(new_price);

        let timestamp = self.now();
        self.price_update_time.set(timestamp);

        let count = self.update_count.get_or_default();
        self.update_count.set(count + 1);

        self.env().emit_event(PriceUpdated {
            old_price,
            new_price,
            timestamp,
        });
    }

    /// Block time in seconds
    fn now(&self) -> u64 {
        self.env().get_block_time() / 1000
    }

    fn only_manager(&self) {
        let caller = self.env().caller();
        let manager = self.manager.get_or_revert_with(OracleError::Unauthorized);
        if caller != manager {
            self.env().revert(OracleError::Unauthorized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostRef, NoArgs};

    #[test]
    fn test_oracle_defaults() {
        let env = odra_test::env();
        let oracle = PriceOracle::deploy(&env, NoArgs);

        assert_eq!(oracle.get_current_price(), DEFAULT_PRICE);
        let (price, _updated_at, count) = oracle.get_price_info();
        assert_eq!(price, DEFAULT_PRICE);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_update_price_within_bounds() {
        let env = odra_test::env();
        let mut oracle = PriceOracle::deploy(&env, NoArgs);

        oracle.update_price(60_000);
        assert_eq!(oracle.get_current_price(), 60_000);
        let (_, _, count) = oracle.get_price_info();
        assert_eq!(count, 1);

        assert_eq!(
            oracle.try_update_price(999),
            Err(OracleError::PriceOutOfBounds.into())
        );
        assert_eq!(
            oracle.try_update_price(1_000_001),
            Err(OracleError::PriceOutOfBounds.into())
        );
        assert_eq!(oracle.get_current_price(), 60_000);
    }

    #[test]
    fn test_update_price_requires_oracle_role() {
        let env = odra_test::env();
        let mut oracle = PriceOracle::deploy(&env, NoArgs);
        let outsider = env.get_account(1);

        env.set_caller(outsider);
        assert_eq!(
            oracle.try_update_price(60_000),
            Err(OracleError::Unauthorized.into())
        );

        env.set_caller(env.get_account(0));
        oracle.set_oracle_address(outsider);
        env.set_caller(outsider);
        oracle.update_price(60_000);
        assert_eq!(oracle.get_current_price(), 60_000);
    }

    #[test]
    fn test_emergency_update_bypasses_bounds() {
        let env = odra_test::env();
        let mut oracle = PriceOracle::deploy(&env, NoArgs);

        oracle.emergency_update(5);
        assert_eq!(oracle.get_current_price(), 5);

        env.set_caller(env.get_account(1));
        assert_eq!(
            oracle.try_emergency_update(10),
            Err(OracleError::Unauthorized.into())
        );
    }

    #[test]
    fn test_set_price_bounds_validation() {
        let env = odra_test::env();
        let mut oracle = PriceOracle::deploy(&env, NoArgs);

        assert_eq!(
            oracle.try_set_price_bounds(0, 100),
            Err(OracleError::InvalidBounds.into())
        );
        assert_eq!(
            oracle.try_set_price_bounds(200, 100),
            Err(OracleError::InvalidBounds.into())
        );

        oracle.set_price_bounds(10_000, 2_000_000);
        assert!(oracle.validate_price(2_000_000));
        assert!(!oracle.validate_price(9_999));
    }
}
