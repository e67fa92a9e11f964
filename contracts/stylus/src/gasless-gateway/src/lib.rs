//! Forwarder that only relays authorizations to accounts delegated to the expected executor.
//!
//! The gateway holds no per-account state: it reads the account's EIP-7702 delegation
//! designator, compares it with the implementation fixed by the constructor, and forwards the
//! executor calldata unchanged. Whatever the account reverts with is re-raised verbatim.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod abi;
pub mod delegate;
pub mod errors;

mod gateway;
pub use gateway::GaslessGateway;
