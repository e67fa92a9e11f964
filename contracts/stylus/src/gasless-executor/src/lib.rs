//! Gas-abstraction executor for EIP-7702 delegated accounts, built for Arbitrum Stylus.
//!
//! An account delegates to this contract and signs [`Authorization`]s off-chain; any relayer
//! can then submit them through `executeOne` / `executeBatch`. The account pays the relayer
//! back in an ERC-20 fee token, priced from the gas the attempt actually consumed.
//!
//! Layout:
//! - [`executor`] is the host-agnostic engine (verification, gas guard, calls, fees).
//! - [`host`] declares the ports the engine needs and implements them on the Stylus VM.
//! - [`GaslessExecutor`] is the contract entrypoint wiring the two together.
//!
//! [`Authorization`]: gasless_executor_types::Authorization
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod abi;
pub mod errors;
pub mod events;
pub mod executor;
pub mod host;
pub mod utils;

mod gasless_executor;
pub use gasless_executor::GaslessExecutor;

#[cfg(test)]
mod testing;
