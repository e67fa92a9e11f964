//! Relayer-side calldata for the executor and gateway entrypoints.

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use gasless_executor_types::{Authorization, BatchAuthorization, IGaslessExecutor, IGaslessGateway};

/// Calldata for `executeOne`, sent to the delegated account itself.
pub fn execute_one_calldata(authorization: &Authorization, signature: &[u8], forced: bool) -> Vec<u8> {
    IGaslessExecutor::executeOneCall {
        authorization: authorization.clone(),
        signature: Bytes::copy_from_slice(signature),
        forced,
    }
    .abi_encode()
}

pub fn execute_batch_calldata(
    authorization: &BatchAuthorization,
    signature: &[u8],
    forced: bool,
) -> Vec<u8> {
    IGaslessExecutor::executeBatchCall {
        authorization: authorization.clone(),
        signature: Bytes::copy_from_slice(signature),
        forced,
    }
    .abi_encode()
}

/// Calldata for the gateway's `forward`, which checks `account`'s delegate before relaying.
pub fn forward_calldata(
    authorization: &Authorization,
    signature: &[u8],
    forced: bool,
    account: Address,
) -> Vec<u8> {
    IGaslessGateway::forwardCall {
        authorization: authorization.clone(),
        signature: Bytes::copy_from_slice(signature),
        forced,
        account,
    }
    .abi_encode()
}

pub fn forward_batch_calldata(
    authorization: &BatchAuthorization,
    signature: &[u8],
    forced: bool,
    account: Address,
) -> Vec<u8> {
    IGaslessGateway::forwardBatchCall {
        authorization: authorization.clone(),
        signature: Bytes::copy_from_slice(signature),
        forced,
        account,
    }
    .abi_encode()
}
