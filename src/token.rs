//! CEP-18 compatible token implementation for vGold
//! This module provides the virtual gold token backing the lending protocol
use odra::prelude::*;
use crate::errors::TokenError;
use crate::events::{Approval, Transfer};

/// Maximum vGold supply: 1B tokens at 6 decimals
pub const MAX_SUPPLY: u64 = 1_000_000_000_000_000;

/// vGold token module implementing the CEP-18 standard
#[odra::module]
pub struct VGoldToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<u64>,
    /// Manager address (can rotate the minter)
    manager: Var<Address>,
    /// Authorized minter (the lending pool)
    minter: Var<Address>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, u64>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), u64>,
}

#[odra::module]
impl VGoldToken {
    /// Initialize the vGold token
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.name.set(String::from("Virtual Gold"));
        self.symbol.set(String::from("vGOLD"));
        self.decimals.set(6);
        self.total_supply.set(0);
        self.manager.set(caller);
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> u64 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> u64 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> u64 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Designate the authorized minter (manager only)
    pub fn set_minter(&mut self, minter: Address) {
        self.only_manager();
        self.minter.set(minter);
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: u64) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: u64) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: u64) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens (minter only)
    pub fn mint(&mut self, to: Address, amount: u64) {
        self.only_minter();

        let current_supply = self.total_supply();
        let new_supply = current_supply
            .checked_add(amount)
            .unwrap_or_revert_with(&self.env(), TokenError::ExceedsMaxSupply);
        if new_supply > MAX_SUPPLY {
            self.env().revert(TokenError::ExceedsMaxSupply);
        }
        self.total_supply.set(new_supply);

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to,
            value: amount,
        });
    }

    /// Burn tokens from an account (minter only)
    pub fn burn(&mut self, from: Address, amount: u64) {
        self.only_minter();

        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, current_balance - amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);

        self.env().emit_event(Transfer {
            from,
            to: Address::from(self.env().self_address()),
            value: amount,
        });
    }

    /// Internal transfer function
    fn transfer_internal(&mut self, from: Address, to: Address, amount: u64) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    /// Internal approval function
    fn approve_internal(&mut self, owner: Address, spender: Address, amount: u64) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }

    fn only_manager(&self) {
        let caller = self.env().caller();
        let manager = self.manager.get_or_revert_with(TokenError::Unauthorized);
        if caller != manager {
            self.env().revert(TokenError::Unauthorized);
        }
    }

    fn only_minter(&self) {
        let caller = self.env().caller();
        let minter = self.minter.get_or_revert_with(TokenError::Unauthorized);
        if caller != minter {
            self.env().revert(TokenError::Unauthorized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostRef, NoArgs};

    #[test]
    fn test_token_metadata() {
        let env = odra_test::env();
        let token = VGoldToken::deploy(&env, NoArgs);

        assert_eq!(token.name(), "Virtual Gold");
        assert_eq!(token.symbol(), "vGOLD");
        assert_eq!(token.decimals(), 6);
        assert_eq!(token.total_supply(), 0);
    }

    #[test]
    fn test_mint_requires_minter_role() {
        let env = odra_test::env();
        let mut token = VGoldToken::deploy(&env, NoArgs);
        let user = env.get_account(1);

        // Manager is not automatically the minter
        assert_eq!(
            token.try_mint(user, 100),
            Err(TokenError::Unauthorized.into())
        );

        let admin = env.get_account(0);
        token.set_minter(admin);
        token.mint(user, 100);
        assert_eq!(token.balance_of(user), 100);
        assert_eq!(token.total_supply(), 100);
    }

    #[test]
    fn test_mint_respects_supply_cap() {
        let env = odra_test::env();
        let mut token = VGoldToken::deploy(&env, NoArgs);
        let admin = env.get_account(0);
        token.set_minter(admin);

        token.mint(admin, MAX_SUPPLY);
        assert_eq!(
            token.try_mint(admin, 1),
            Err(TokenError::ExceedsMaxSupply.into())
        );
    }

    #[test]
    fn test_transfer_and_allowance_flow() {
        let env = odra_test::env();
        let mut token = VGoldToken::deploy(&env, NoArgs);
        let admin = env.get_account(0);
        let alice = env.get_account(1);
        let bob = env.get_account(2);
        token.set_minter(admin);
        token.mint(alice, 1_000);

        env.set_caller(alice);
        token.transfer(bob, 300);
        assert_eq!(token.balance_of(alice), 700);
        assert_eq!(token.balance_of(bob), 300);

        token.approve(bob, 200);
        env.set_caller(bob);
        token.transfer_from(alice, bob, 150);
        assert_eq!(token.balance_of(alice), 550);
        assert_eq!(token.allowance(alice, bob), 50);
        assert_eq!(
            token.try_transfer_from(alice, bob, 100),
            Err(TokenError::InsufficientAllowance.into())
        );
    }

    #[test]
    fn test_burn_checks_balance() {
        let env = odra_test::env();
        let mut token = VGoldToken::deploy(&env, NoArgs);
        let admin = env.get_account(0);
        let user = env.get_account(1);
        token.set_minter(admin);
        token.mint(user, 100);

        assert_eq!(
            token.try_burn(user, 101),
            Err(TokenError::InsufficientBalance.into())
        );
        token.burn(user, 100);
        assert_eq!(token.balance_of(user), 0);
        assert_eq!(token.total_supply(), 0);
    }
}
