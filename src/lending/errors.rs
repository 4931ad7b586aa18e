//! Error types for the Lending Protocol

use odra::prelude::*;

/// Errors that can occur in the lending protocol
#[odra::odra_error]
#[derive(Debug, PartialEq, Eq)]
pub enum LendingError {
    // Access Control Errors
    /// Caller lacks the required role
    Unauthorized = 1,

    // Input Errors
    /// Zero or otherwise invalid amount
    InvalidAmount = 2,
    /// Invalid protocol parameter
    InvalidParameter = 3,

    // Borrowing Errors
    /// Provided collateral is below the required amount
    InsufficientCollateral = 4,
    /// An active position of the same kind already exists
    PositionAlreadyActive = 5,
    /// No active position to operate on
    NoActivePosition = 6,
    /// No position was ever opened for this account and role
    NoPosition = 7,

    // Lending Errors
    /// Lending period has not ended yet
    LendingPeriodNotEnded = 8,

    // Configuration Errors
    /// Collateral ratio below the 110% floor
    RatioTooLow = 9,
    /// Collaborator address not configured
    InvalidConfiguration = 10,

    // General Errors
    /// Math overflow occurred
    MathOverflow = 11,
}
