//! Collateral Vault - Tracked base-currency ledger used as the payment rail
//!
//! Holds per-account base currency (microALGO-class units) credited by the
//! bridge manager, and an escrow bucket the lending pool moves collateral
//! through. The pool is the only operator allowed to escrow or release funds.
use odra::prelude::*;
use crate::errors::PaymentError;
use crate::events::{CollateralEscrowed, CollateralReleased};

/// Collateral Vault contract
#[odra::module]
pub struct CollateralVault {
    /// Manager address (bridge operator)
    manager: Var<Address>,
    /// Authorized operator (the lending pool)
    operator: Var<Address>,
    /// Free balances: account -> amount
    balances: Mapping<Address, u64>,
    /// Total amount held in escrow
    escrow_total: Var<u64>,
}

#[odra::module]
impl CollateralVault {
    /// Initialize the vault
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.manager.set(caller);
        self.escrow_total.set(0);
    }

    /// Designate the authorized operator (manager only)
    pub fn set_operator(&mut self, operator: Address) {
        self.only_manager();
        self.operator.set(operator);
    }

    /// Credit an account with bridged base currency (manager only)
    pub fn fund(&mut self, account: Address, amount: u64) {
        self.only_manager();
        let balance = self.balance_of(account);
        self.balances.set(&account, balance + amount);
    }

    /// Move base currency from an account into escrow (operator only)
    pub fn pay_in(&mut self, account: Address, amount: u64) {
        self.only_operator();

        let balance = self.balance_of(account);
        if balance < amount {
            self.env().revert(PaymentError::InsufficientBalance);
        }
        self.balances.set(&account, balance - amount);

        let escrow = self.escrow_total.get_or_default();
        self.escrow_total.set(escrow + amount);

        self.env().emit_event(CollateralEscrowed { account, amount });
    }

    /// Release escrowed base currency to an account (operator only)
    pub fn pay_out(&mut self, account: Address, amount: u64) {
        self.only_operator();

        let escrow = self.escrow_total.get_or_default();
        if escrow < amount {
            self.env().revert(PaymentError::InsufficientEscrow);
        }
        self.escrow_total.set(escrow - amount);

        let balance = self.balance_of(account);
        self.balances.set(&account, balance + amount);

        self.env().emit_event(CollateralReleased { account, amount });
    }

    /// Get the free balance of an account
    pub fn balance_of(&self, account: Address) -> u64 {
        self.balances.get(&account).unwrap_or_default()
    }

    /// Get the total escrowed amount
    pub fn escrow_total(&self) -> u64 {
        self.escrow_total.get_or_default()
    }

    fn only_manager(&self) {
        let caller = self.env().caller();
        let manager = self.manager.get_or_revert_with(PaymentError::Unauthorized);
        if caller != manager {
            self.env().revert(PaymentError::Unauthorized);
        }
    }

    fn only_operator(&self) {
        let caller = self.env().caller();
        let operator = self.operator.get_or_revert_with(PaymentError::Unauthorized);
        if caller != operator {
            self.env().revert(PaymentError::Unauthorized);
        }
    }
}
