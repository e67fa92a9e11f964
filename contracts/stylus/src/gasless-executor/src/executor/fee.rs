//! Fee processor.
//!
//! The fee is `(gas used so far + transfer budget + fixed overhead) * gas price + extra cost`,
//! converted into the fee token at `nativePricePerUnit / 1e18`, rounded down. The cap and the
//! balance check are never relaxed; only a transfer that overruns its gas budget is tolerated,
//! and only in forced mode.

use alloy_primitives::{U256, U512};
use gasless_executor_types::{constants::PRICE_PRECISION, FeeConfig};

use super::{gas::gas_units, Executor, FeeReceipt};
use crate::{
    errors::{
        ExecutionError, ExecutorError, FeeTransferFailed, FeeTransferGasLimitExceededNotForced,
        InsufficientFundsForFee, MaxFeeExceeded,
    },
    events::{FeeTransferGasLimitExceeded, FeeTransferProcessed},
    host::{ExtraCostOracle, Host},
};

/// Token-denominated fee for `total_gas`. Multiplies in 512 bits before dividing, so only a
/// quotient that does not fit in 256 bits yields `None`.
pub fn compute_fee(
    total_gas: U256,
    gas_price: U256,
    extra_cost: U256,
    native_price_per_unit: U256,
) -> Option<U256> {
    let cost_in_native = total_gas.saturating_mul(gas_price).saturating_add(extra_cost);
    let scaled: U512 = cost_in_native.widening_mul(native_price_per_unit);
    let fee = scaled / U512::from(PRICE_PRECISION);
    U256::checked_from_limbs_slice(fee.as_limbs())
}

impl<H: Host, O: ExtraCostOracle> Executor<'_, H, O> {
    /// Gas to keep back for the fee transfer, zero when the fee is disabled.
    pub(super) fn fee_reserve(&self, fee: &FeeConfig) -> u64 {
        if fee.is_enabled() {
            gas_units(fee.transferGasBudget)
        } else {
            0
        }
    }

    /// Charge the fee for everything consumed since `start_gas` and pay it to the signed receiver.
    pub(super) fn process_fee(
        &mut self,
        fee: &FeeConfig,
        start_gas: u64,
        forced: bool,
    ) -> Result<FeeReceipt, ExecutionError> {
        let consumed = start_gas.saturating_sub(self.host.gas_left());
        let total_gas = U256::from(consumed)
            .saturating_add(fee.transferGasBudget)
            .saturating_add(fee.fixedOverhead);
        let extra_cost = self.oracle.estimate();
        let amount = compute_fee(total_gas, self.host.gas_price(), extra_cost, fee.nativePricePerUnit)
            .unwrap_or(U256::MAX);

        if amount > fee.maxFee {
            return Err(ExecutorError::MaxFeeExceeded(MaxFeeExceeded { fee: amount, maxFee: fee.maxFee }).into());
        }

        let executor = self.host.executor();
        let balance = self.host.balance_of(fee.feeToken, executor);
        if balance < amount {
            return Err(ExecutorError::InsufficientFundsForFee(InsufficientFundsForFee {
                token: fee.feeToken,
                balance,
                fee: amount,
            })
            .into());
        }

        let before = self.host.gas_left();
        if !self.host.transfer(fee.feeToken, fee.feeReceiver, amount) {
            return Err(ExecutorError::FeeTransferFailed(FeeTransferFailed {
                token: fee.feeToken,
                receiver: fee.feeReceiver,
                amount,
            })
            .into());
        }
        let transfer_gas_used = before.saturating_sub(self.host.gas_left());

        let transfer_gas_exceeded = U256::from(transfer_gas_used) > fee.transferGasBudget;
        if transfer_gas_exceeded {
            if !forced {
                return Err(ExecutorError::FeeTransferGasLimitExceededNotForced(
                    FeeTransferGasLimitExceededNotForced {
                        budget: fee.transferGasBudget,
                        used: U256::from(transfer_gas_used),
                    },
                )
                .into());
            }
            self.host.emit(FeeTransferGasLimitExceeded {
                budget: fee.transferGasBudget,
                used: U256::from(transfer_gas_used),
            });
        }

        self.host.emit(FeeTransferProcessed {
            receiver: fee.feeReceiver,
            token: fee.feeToken,
            amount,
            totalGas: total_gas,
            extraCost: extra_cost,
        });

        Ok(FeeReceipt {
            token: fee.feeToken,
            receiver: fee.feeReceiver,
            amount,
            total_gas,
            extra_cost,
            transfer_gas_used,
            transfer_gas_exceeded,
        })
    }
}
