//! Lending Protocol - vGold lending and borrowing with base-currency collateral
//!
//! Users lend vGold for a fixed term to earn tiered interest, or post
//! base-currency collateral to borrow freshly minted vGold. Positions are
//! time-bounded; under-collateralized loans can be liquidated at a discount.

pub mod collateral;
pub mod errors;
pub mod events;
pub mod pool;
pub mod rates;


pub use collateral::{liquidation_payout, required_collateral};
pub use errors::LendingError;
pub use events::*;
pub use pool::{LendingPool, Position, PositionStatus};
pub use rates::PositionRole;
