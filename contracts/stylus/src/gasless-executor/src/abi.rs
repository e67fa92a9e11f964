//! ABI tuple shapes accepted by the `#[public]` entrypoints.
//!
//! Stylus' ABI glue supports tuples via `AbiType`, and a Solidity `struct` is ABI-equivalent to a
//! tuple, so the entrypoints take these and convert them into the shared `sol!` structs.

use alloy_primitives::{Address, U256};
use gasless_executor_types::{Authorization, BatchAuthorization, CallParts, FeeConfigParts};
use stylus_sdk::abi::Bytes;

/// `(target, value, gasLimit, data)`
pub type CallTuple = (Address, U256, U256, Bytes);

/// `(feeToken, maxFee, nativePricePerUnit, transferGasBudget, fixedOverhead, feeReceiver)`
pub type FeeConfigTuple = FeeConfigParts;

/// `(call, fee, nonce)`
pub type AuthorizationTuple = (CallTuple, FeeConfigTuple, U256);

/// `(calls, fee, nonce)`
pub type BatchAuthorizationTuple = (alloc::vec::Vec<CallTuple>, FeeConfigTuple, U256);

fn call_parts((target, value, gas_limit, data): CallTuple) -> CallParts {
    (target, value, gas_limit, data.0)
}

pub fn decode_authorization((call, fee, nonce): AuthorizationTuple) -> Authorization {
    Authorization::from_parts((call_parts(call), fee, nonce))
}

pub fn decode_batch_authorization((calls, fee, nonce): BatchAuthorizationTuple) -> BatchAuthorization {
    BatchAuthorization::from_parts((calls.into_iter().map(call_parts).collect(), fee, nonce))
}
