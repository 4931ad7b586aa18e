//! Event definitions for the collaborator contracts
use odra::prelude::*;

/// Event emitted when vGold tokens are transferred
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred (smallest vGold unit)
    pub value: u64,
}

/// Event emitted when a vGold approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: u64,
}

/// Event emitted when base currency moves into escrow
#[odra::event]
pub struct CollateralEscrowed {
    /// Account that was debited
    pub account: Address,
    /// Amount escrowed
    pub amount: u64,
}

/// Event emitted when base currency is released from escrow
#[odra::event]
pub struct CollateralReleased {
    /// Account that was credited
    pub account: Address,
    /// Amount released
    pub amount: u64,
}

/// Event emitted when the gold price is updated
#[odra::event]
pub struct PriceUpdated {
    /// Previous price
    pub old_price: u64,
    /// New price
    pub new_price: u64,
    /// Timestamp of the update (seconds)
    pub timestamp: u64,
}

/// Event emitted when the oracle price bounds change
#[odra::event]
pub struct PriceBoundsUpdated {
    /// New minimum accepted price
    pub min_price: u64,
    /// New maximum accepted price
    pub max_price: u64,
    /// Manager that changed the bounds
    pub updated_by: Address,
}
