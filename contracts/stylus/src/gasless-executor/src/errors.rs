//! Revert reasons surfaced by the executor.
//!
//! Every hard failure carries enough context (addresses, amounts, selectors, indices) for a
//! relayer to diagnose it without re-simulating the transaction.

use alloc::vec::Vec;

use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    // Authorization.
    #[derive(Debug, PartialEq, Eq)]
    error InvalidNonce(uint256 expected, uint256 provided);
    #[derive(Debug, PartialEq, Eq)]
    error InvalidSigner(address recovered, address expected);

    // Malformed input.
    #[derive(Debug, PartialEq, Eq)]
    error InvalidTarget(uint256 index);
    #[derive(Debug, PartialEq, Eq)]
    error InvalidCalldata(uint256 index, uint256 length);
    #[derive(Debug, PartialEq, Eq)]
    error InvalidCallCount(uint256 count, uint256 max);

    // Gas admission.
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientGas(uint256 available, uint256 required);
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientGasForRetentionRule(uint256 forwardable, uint256 requested);

    // Call outcome (non-forced, callee gave no reason).
    #[derive(Debug, PartialEq, Eq)]
    error ExecutionFailed(address target, uint256 value, bytes4 selector);
    #[derive(Debug, PartialEq, Eq)]
    error BatchExecutionFailed(uint256 index, address target, uint256 value, bytes4 selector);

    // Fee.
    #[derive(Debug, PartialEq, Eq)]
    error MaxFeeExceeded(uint256 fee, uint256 maxFee);
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientFundsForFee(address token, uint256 balance, uint256 fee);
    #[derive(Debug, PartialEq, Eq)]
    error FeeTransferFailed(address token, address receiver, uint256 amount);
    #[derive(Debug, PartialEq, Eq)]
    error FeeTransferGasLimitExceededNotForced(uint256 budget, uint256 used);
}

#[derive(SolidityError, Debug, PartialEq, Eq)]
pub enum ExecutorError {
    InvalidNonce(InvalidNonce),
    InvalidSigner(InvalidSigner),
    InvalidTarget(InvalidTarget),
    InvalidCalldata(InvalidCalldata),
    InvalidCallCount(InvalidCallCount),
    InsufficientGas(InsufficientGas),
    InsufficientGasForRetentionRule(InsufficientGasForRetentionRule),
    ExecutionFailed(ExecutionFailed),
    BatchExecutionFailed(BatchExecutionFailed),
    MaxFeeExceeded(MaxFeeExceeded),
    InsufficientFundsForFee(InsufficientFundsForFee),
    FeeTransferFailed(FeeTransferFailed),
    FeeTransferGasLimitExceededNotForced(FeeTransferGasLimitExceededNotForced),
}

/// Why an execution attempt aborted. Either way the whole attempt is rolled back.
#[derive(Debug, PartialEq, Eq)]
pub enum ExecutionError {
    /// The executor refused the attempt with one of its own errors.
    Rejected(ExecutorError),
    /// A forwarded call reverted with this payload; it is re-raised unchanged.
    Reverted(Vec<u8>),
}

impl ExecutionError {
    /// Failure of a non-forced call: bubble the callee's revert data if it gave any,
    /// otherwise fall back to a synthesized error.
    pub fn from_call_revert(return_data: Vec<u8>, fallback: impl FnOnce() -> ExecutorError) -> Self {
        if return_data.is_empty() {
            Self::Rejected(fallback())
        } else {
            Self::Reverted(return_data)
        }
    }
}

impl From<ExecutorError> for ExecutionError {
    fn from(err: ExecutorError) -> Self {
        Self::Rejected(err)
    }
}

impl From<ExecutionError> for Vec<u8> {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Rejected(err) => err.into(),
            ExecutionError::Reverted(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, FixedBytes, U256};
    use alloy_sol_types::SolError;

    #[test]
    fn rejected_errors_encode_as_custom_errors() {
        let err = InvalidNonce { expected: U256::from(3u64), provided: U256::from(1u64) };
        let encoded: Vec<u8> = ExecutionError::Rejected(ExecutorError::InvalidNonce(err.clone())).into();
        assert_eq!(encoded, err.abi_encode());
        assert_eq!(&encoded[..4], InvalidNonce::SELECTOR.as_slice());
    }

    #[test]
    fn reverted_payload_is_passed_through() {
        let payload = alloc::vec![0x08, 0xc3, 0x79, 0xa0, 0x01, 0x02];
        let encoded: Vec<u8> = ExecutionError::Reverted(payload.clone()).into();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn empty_revert_falls_back_to_synthesized_error() {
        let fallback = || {
            ExecutorError::ExecutionFailed(ExecutionFailed {
                target: Address::repeat_byte(1),
                value: U256::ZERO,
                selector: FixedBytes::ZERO,
            })
        };
        assert!(matches!(
            ExecutionError::from_call_revert(Vec::new(), fallback),
            ExecutionError::Rejected(ExecutorError::ExecutionFailed(_))
        ));
        assert_eq!(
            ExecutionError::from_call_revert(alloc::vec![1, 2, 3, 4], fallback),
            ExecutionError::Reverted(alloc::vec![1, 2, 3, 4])
        );
    }
}
