//! Error definitions for the collaborator contracts
use odra::prelude::*;

/// Custom errors for the vGold token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Caller is not the manager or minter
    Unauthorized = 102,

    /// Mint would exceed the maximum token supply
    ExceedsMaxSupply = 103,
}

/// Custom errors for the collateral vault contract
#[odra::odra_error]
pub enum PaymentError {
    /// Account's tracked balance is smaller than the requested amount
    InsufficientBalance = 200,

    /// Escrow holds less than the requested payout
    InsufficientEscrow = 201,

    /// Caller is not the manager or operator
    Unauthorized = 202,
}

/// Custom errors for the price oracle contract
#[odra::odra_error]
pub enum OracleError {
    /// Price outside the configured bounds
    PriceOutOfBounds = 300,

    /// Bounds are inverted or zero
    InvalidBounds = 301,

    /// Caller is not the oracle or manager
    Unauthorized = 302,
}
