//! Ports between the executor engine and the chain it runs on.
//!
//! The engine only ever talks to a [`Host`]; on-chain that is [`OnchainHost`] over the Stylus VM,
//! in tests an in-memory chain. The host owns atomicity: if an attempt returns an error, every
//! effect it made through these ports (nonce, balances, calls, events) must be discarded.

use alloc::vec::Vec;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolEvent;

pub mod interfaces;
mod onchain;
mod oracle;

pub use onchain::OnchainHost;
pub use oracle::{ArbGasInfoOracle, NoExtraCost};

/// Result of a forwarded call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallResult {
    pub success: bool,
    pub return_data: Vec<u8>,
    pub gas_used: u64,
}

/// Execution context of the attempt.
pub trait ExecutionEnv {
    /// The executing account; the only identity allowed to sign authorizations.
    fn executor(&self) -> Address;

    fn chain_id(&self) -> u64;

    /// Gas remaining in the current frame.
    fn gas_left(&self) -> u64;

    /// Effective gas price of the enclosing transaction.
    fn gas_price(&self) -> U256;

    fn emit<E: SolEvent>(&mut self, event: E);
}

/// Per-account replay counter. Only ever advanced by one.
pub trait NonceStore {
    fn current_nonce(&self) -> U256;

    fn advance_nonce(&mut self);
}

pub trait Caller {
    /// Forward exactly `gas` and `value` to `target`.
    fn call(&mut self, target: Address, value: U256, gas: u64, data: &[u8]) -> CallResult;
}

/// Fungible-token primitive used to pay fees.
pub trait TokenLedger {
    fn balance_of(&self, token: Address, owner: Address) -> U256;

    /// Transfer `amount` of `token` from the executor to `to`. Returns `false` on failure.
    fn transfer(&mut self, token: Address, to: Address, amount: U256) -> bool;
}

pub trait SignerRecovery {
    /// Recover the signer of `digest`; `None` if the signature is malformed or unrecoverable.
    fn recover(&self, digest: B256, signature: &[u8]) -> Option<Address>;
}

/// Chain-specific cost added on top of `gas * gas_price` (e.g. an L2's L1 data fee).
pub trait ExtraCostOracle {
    fn estimate(&self) -> U256;
}

/// Everything the engine needs from its environment.
pub trait Host: ExecutionEnv + NonceStore + Caller + TokenLedger + SignerRecovery {}

impl<T> Host for T where T: ExecutionEnv + NonceStore + Caller + TokenLedger + SignerRecovery {}
