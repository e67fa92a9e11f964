//! Host-agnostic authorization-and-execution engine.
//!
//! One attempt runs, in order: call shape validation, authorization (nonce, then signer), the
//! gas-guarded forwarding of each call, fee processing against the gas measured from the start
//! of the attempt, and the completion event. Any `Err` means the attempt must leave no trace;
//! the [`Host`] is responsible for discarding its effects.
//!
//! Re-entrancy: the engine holds the host mutably for the whole attempt, and on-chain the Stylus
//! VM rejects re-entrant calls into the contract (the SDK's `reentrant` feature is not enabled).
//! The nonce is nevertheless consumed before the first call is forwarded.

use alloc::vec::Vec;

use alloy_primitives::{Address, FixedBytes, U256};
use gasless_executor_types::Call;

use crate::{
    host::{ExtraCostOracle, Host},
    utils::bytes::selector_of,
};

mod authorization;
mod calls;
pub mod constants;
mod fee;
mod gas;


pub use calls::{validate_call, validate_call_count};
pub use fee::compute_fee;
pub use gas::{ensure_forwardable, forwardable_gas, gas_units};

/// Executes signed authorizations for the account behind `host`.
pub struct Executor<'a, H, O> {
    host: &'a mut H,
    oracle: &'a O,
}

impl<'a, H: Host, O: ExtraCostOracle> Executor<'a, H, O> {
    pub fn new(host: &'a mut H, oracle: &'a O) -> Self {
        Self { host, oracle }
    }

    pub fn current_nonce(&self) -> U256 {
        self.host.current_nonce()
    }
}

/// A call that reverted in forced mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFailure {
    pub index: usize,
    pub target: Address,
    pub value: U256,
    pub selector: FixedBytes<4>,
    pub return_data: Vec<u8>,
}

impl CallFailure {
    fn new(index: usize, call: &Call, return_data: Vec<u8>) -> Self {
        Self {
            index,
            target: call.target,
            value: call.value,
            selector: selector_of(&call.data),
            return_data,
        }
    }
}

/// What the fee processor charged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeReceipt {
    pub token: Address,
    pub receiver: Address,
    pub amount: U256,
    pub total_gas: U256,
    pub extra_cost: U256,
    pub transfer_gas_used: u64,
    /// Only ever `true` in forced mode.
    pub transfer_gas_exceeded: bool,
}

/// Outcome of a committed attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionReport {
    /// The nonce this attempt consumed.
    pub nonce: U256,
    pub total_calls: usize,
    /// Calls that succeeded before any forced stop.
    pub executed_calls: usize,
    pub failure: Option<CallFailure>,
    pub fee: Option<FeeReceipt>,
}

impl ExecutionReport {
    /// `true` if every call ran and nothing degraded to an event.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && !self.fee.as_ref().is_some_and(|fee| fee.transfer_gas_exceeded)
    }
}
