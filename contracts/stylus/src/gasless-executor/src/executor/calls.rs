//! Call shape validation and the single-call / batch execution paths.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use gasless_executor_types::{
    batch_authorization_digest,
    constants::{MAX_BATCH_SIZE, MIN_BATCH_SIZE, SELECTOR_LEN},
    authorization_digest, Authorization, BatchAuthorization, Call,
};

use super::{
    constants::{BATCH_OVERHEAD_GAS, POST_CALL_OVERHEAD_GAS},
    gas::{ensure_forwardable, gas_units, insufficient_gas},
    CallFailure, ExecutionReport, Executor,
};
use crate::{
    errors::{
        BatchExecutionFailed, ExecutionError, ExecutionFailed, ExecutorError, InvalidCallCount,
        InvalidCalldata, InvalidTarget,
    },
    events::{BatchCallFailed, BatchExecutionCompleted, CallExecutionFailed, ExecutionCompleted},
    host::{ExtraCostOracle, Host},
    utils::bytes::selector_of,
};

/// Syntactic checks on one call: non-zero target, and calldata either empty or selector-shaped.
pub fn validate_call(index: usize, call: &Call) -> Result<(), ExecutionError> {
    if call.target == Address::ZERO {
        return Err(ExecutorError::InvalidTarget(InvalidTarget { index: U256::from(index) }).into());
    }
    let length = call.data.len();
    if length != 0 && length < SELECTOR_LEN {
        return Err(ExecutorError::InvalidCalldata(InvalidCalldata {
            index: U256::from(index),
            length: U256::from(length),
        })
        .into());
    }
    Ok(())
}

pub fn validate_call_count(count: usize) -> Result<(), ExecutionError> {
    if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&count) {
        return Err(ExecutorError::InvalidCallCount(InvalidCallCount {
            count: U256::from(count),
            max: U256::from(MAX_BATCH_SIZE),
        })
        .into());
    }
    Ok(())
}

impl<H: Host, O: ExtraCostOracle> Executor<'_, H, O> {
    /// Execute one signed call.
    ///
    /// In forced mode a reverting call is reported through `CallExecutionFailed` and the
    /// attempt still consumes the nonce and pays the fee.
    pub fn execute_one(
        &mut self,
        authorization: &Authorization,
        signature: &[u8],
        forced: bool,
    ) -> Result<ExecutionReport, ExecutionError> {
        let start_gas = self.host.gas_left();
        let call = &authorization.call;
        validate_call(0, call)?;

        let executor = self.host.executor();
        let digest = authorization_digest(authorization, self.host.chain_id(), executor);
        let nonce = self.verify_authorization(authorization.nonce, digest, signature)?;

        let fee = &authorization.fee;
        let reserved = POST_CALL_OVERHEAD_GAS.saturating_add(self.fee_reserve(fee));
        let gas_limit = gas_units(call.gasLimit);
        ensure_forwardable(self.host.gas_left(), gas_limit, reserved)?;

        let selector = selector_of(&call.data);
        let result = self.host.call(call.target, call.value, gas_limit, &call.data);

        let mut failure = None;
        if !result.success {
            if !forced {
                return Err(ExecutionError::from_call_revert(result.return_data, || {
                    ExecutorError::ExecutionFailed(ExecutionFailed {
                        target: call.target,
                        value: call.value,
                        selector,
                    })
                }));
            }
            self.host.emit(CallExecutionFailed { target: call.target, value: call.value, selector });
            failure = Some(CallFailure::new(0, call, result.return_data));
        }

        let fee_receipt = if fee.is_enabled() {
            Some(self.process_fee(fee, start_gas, forced)?)
        } else {
            None
        };

        self.host.emit(ExecutionCompleted {
            executor,
            nonce,
            target: call.target,
            value: call.value,
            selector,
        });

        Ok(ExecutionReport {
            nonce,
            total_calls: 1,
            executed_calls: usize::from(failure.is_none()),
            failure,
            fee: fee_receipt,
        })
    }

    /// Execute an ordered batch of signed calls.
    ///
    /// Every call is shape-checked before the signature is looked at. Each call is only started
    /// if the gas limits of all calls after it still fit. In forced mode the first failing call
    /// stops the batch; the calls after it are skipped, not attempted.
    pub fn execute_batch(
        &mut self,
        authorization: &BatchAuthorization,
        signature: &[u8],
        forced: bool,
    ) -> Result<ExecutionReport, ExecutionError> {
        let start_gas = self.host.gas_left();
        let calls = &authorization.calls;
        validate_call_count(calls.len())?;
        for (index, call) in calls.iter().enumerate() {
            validate_call(index, call)?;
        }

        let executor = self.host.executor();
        let digest = batch_authorization_digest(authorization, self.host.chain_id(), executor);
        let nonce = self.verify_authorization(authorization.nonce, digest, signature)?;

        let fee = &authorization.fee;
        let reserved_base = POST_CALL_OVERHEAD_GAS
            .saturating_add(BATCH_OVERHEAD_GAS)
            .saturating_add(self.fee_reserve(fee));
        let gas_limits: Vec<u64> = calls.iter().map(|call| gas_units(call.gasLimit)).collect();
        let total_gas = gas_limits.iter().fold(0u64, |acc, gas| acc.saturating_add(*gas));

        let available = self.host.gas_left();
        let required = total_gas.saturating_add(reserved_base);
        if available < required {
            return Err(insufficient_gas(available, required));
        }

        let mut remaining = total_gas;
        let mut executed_calls = 0usize;
        let mut failure = None;
        for (index, (call, gas_limit)) in calls.iter().zip(gas_limits).enumerate() {
            remaining = remaining.saturating_sub(gas_limit);
            ensure_forwardable(self.host.gas_left(), gas_limit, reserved_base.saturating_add(remaining))?;

            let result = self.host.call(call.target, call.value, gas_limit, &call.data);
            if result.success {
                executed_calls += 1;
                continue;
            }

            let selector = selector_of(&call.data);
            if !forced {
                return Err(ExecutionError::from_call_revert(result.return_data, || {
                    ExecutorError::BatchExecutionFailed(BatchExecutionFailed {
                        index: U256::from(index),
                        target: call.target,
                        value: call.value,
                        selector,
                    })
                }));
            }
            self.host.emit(BatchCallFailed {
                index: U256::from(index),
                target: call.target,
                value: call.value,
                selector,
            });
            failure = Some(CallFailure::new(index, call, result.return_data));
            break;
        }

        let fee_receipt = if fee.is_enabled() {
            Some(self.process_fee(fee, start_gas, forced)?)
        } else {
            None
        };

        self.host.emit(BatchExecutionCompleted {
            executor,
            nonce,
            totalCalls: U256::from(calls.len()),
            executedCalls: U256::from(executed_calls),
        });

        Ok(ExecutionReport {
            nonce,
            total_calls: calls.len(),
            executed_calls,
            failure,
            fee: fee_receipt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Bytes;

    fn call_with_data(target: Address, data: &'static [u8]) -> Call {
        Call { target, value: U256::ZERO, gasLimit: U256::from(10_000u64), data: Bytes::from_static(data) }
    }

    #[test]
    fn accepts_empty_and_selector_shaped_calldata() {
        let target = Address::repeat_byte(1);
        assert_eq!(validate_call(0, &call_with_data(target, &[])), Ok(()));
        assert_eq!(validate_call(0, &call_with_data(target, &[1, 2, 3, 4])), Ok(()));
        assert_eq!(validate_call(0, &call_with_data(target, &[1, 2, 3, 4, 5])), Ok(()));
    }

    #[test]
    fn rejects_zero_target() {
        assert_eq!(
            validate_call(3, &call_with_data(Address::ZERO, &[])),
            Err(ExecutionError::Rejected(ExecutorError::InvalidTarget(InvalidTarget {
                index: U256::from(3u64)
            })))
        );
    }

    #[test]
    fn rejects_partial_selector() {
        for data in [&[1u8][..], &[1, 2], &[1, 2, 3]] {
            let call = Call { data: Bytes::copy_from_slice(data), ..call_with_data(Address::repeat_byte(1), &[]) };
            assert_eq!(
                validate_call(0, &call),
                Err(ExecutionError::Rejected(ExecutorError::InvalidCalldata(InvalidCalldata {
                    index: U256::ZERO,
                    length: U256::from(data.len()),
                })))
            );
        }
    }

    #[test]
    fn batch_cardinality_bounds() {
        assert!(validate_call_count(0).is_err());
        assert!(validate_call_count(1).is_err());
        assert_eq!(validate_call_count(2), Ok(()));
        assert_eq!(validate_call_count(MAX_BATCH_SIZE), Ok(()));
        assert_eq!(
            validate_call_count(MAX_BATCH_SIZE + 1),
            Err(ExecutionError::Rejected(ExecutorError::InvalidCallCount(InvalidCallCount {
                count: U256::from(MAX_BATCH_SIZE + 1),
                max: U256::from(MAX_BATCH_SIZE),
            })))
        );
    }
}
