//! ABI tuple shapes of the forwarded authorizations.
//!
//! Same layout as the executor's entrypoints; converted into the shared `sol!` structs so the
//! forwarded calldata is re-encoded by the same definitions the executor decodes with.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use gasless_executor_types::{Authorization, BatchAuthorization, CallParts, FeeConfigParts};
use stylus_sdk::abi::Bytes;

/// `(target, value, gasLimit, data)`
pub type CallTuple = (Address, U256, U256, Bytes);

pub type AuthorizationTuple = (CallTuple, FeeConfigParts, U256);

pub type BatchAuthorizationTuple = (Vec<CallTuple>, FeeConfigParts, U256);

fn call_parts((target, value, gas_limit, data): CallTuple) -> CallParts {
    (target, value, gas_limit, data.0)
}

pub fn decode_authorization((call, fee, nonce): AuthorizationTuple) -> Authorization {
    Authorization::from_parts((call_parts(call), fee, nonce))
}

pub fn decode_batch_authorization((calls, fee, nonce): BatchAuthorizationTuple) -> BatchAuthorization {
    BatchAuthorization::from_parts((calls.into_iter().map(call_parts).collect(), fee, nonce))
}
