#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Collaborator contracts
pub mod errors;
pub mod events;
pub mod oracle;
pub mod payment;
pub mod token;

// Lending protocol modules
pub mod lending;
