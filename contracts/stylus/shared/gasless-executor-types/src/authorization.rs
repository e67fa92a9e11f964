//! Signed payload types and the ABI surface of the executor and gateway.
//!
//! Field order is part of the EIP-712 type string; do not reorder.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;

sol! {
    /// One unit of delegated work.
    #[derive(Debug, PartialEq, Eq)]
    struct Call {
        address target;
        uint256 value;
        uint256 gasLimit;
        bytes data;
    }

    /// Fee terms signed together with the calls. `nativePricePerUnit == 0` disables the fee.
    #[derive(Debug, PartialEq, Eq)]
    struct FeeConfig {
        address feeToken;
        uint256 maxFee;
        uint256 nativePricePerUnit;
        uint256 transferGasBudget;
        uint256 fixedOverhead;
        address feeReceiver;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Authorization {
        Call call;
        FeeConfig fee;
        uint256 nonce;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct BatchAuthorization {
        Call[] calls;
        FeeConfig fee;
        uint256 nonce;
    }

    interface IGaslessExecutor {
        function executeOne(Authorization authorization, bytes signature, bool forced) external;
        function executeBatch(BatchAuthorization authorization, bytes signature, bool forced) external;
        function currentNonce() external view returns (uint256 nonce);
        function domainSeparator() external view returns (bytes32 separator);
        function maxBatchSize() external view returns (uint256 size);
    }

    interface IGaslessGateway {
        function implementation() external view returns (address implementation);
        function forward(Authorization authorization, bytes signature, bool forced, address account) external;
        function forwardBatch(BatchAuthorization authorization, bytes signature, bool forced, address account) external;
    }
}

/// ABI tuple layout of [`Call`]: `(target, value, gasLimit, data)`.
pub type CallParts = (Address, U256, U256, Vec<u8>);

/// ABI tuple layout of [`FeeConfig`].
pub type FeeConfigParts = (Address, U256, U256, U256, U256, Address);

/// ABI tuple layout of [`Authorization`].
pub type AuthorizationParts = (CallParts, FeeConfigParts, U256);

/// ABI tuple layout of [`BatchAuthorization`].
pub type BatchAuthorizationParts = (Vec<CallParts>, FeeConfigParts, U256);

impl Call {
    pub fn from_parts((target, value, gas_limit, data): CallParts) -> Self {
        Self { target, value, gasLimit: gas_limit, data: data.into() }
    }
}

impl FeeConfig {
    pub fn from_parts(
        (fee_token, max_fee, native_price_per_unit, transfer_gas_budget, fixed_overhead, fee_receiver): FeeConfigParts,
    ) -> Self {
        Self {
            feeToken: fee_token,
            maxFee: max_fee,
            nativePricePerUnit: native_price_per_unit,
            transferGasBudget: transfer_gas_budget,
            fixedOverhead: fixed_overhead,
            feeReceiver: fee_receiver,
        }
    }

    /// A fee config that disables fee processing.
    pub fn disabled() -> Self {
        Self {
            feeToken: Address::ZERO,
            maxFee: U256::ZERO,
            nativePricePerUnit: U256::ZERO,
            transferGasBudget: U256::ZERO,
            fixedOverhead: U256::ZERO,
            feeReceiver: Address::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.nativePricePerUnit.is_zero()
    }
}

impl Authorization {
    pub fn from_parts((call, fee, nonce): AuthorizationParts) -> Self {
        Self { call: Call::from_parts(call), fee: FeeConfig::from_parts(fee), nonce }
    }
}

impl BatchAuthorization {
    pub fn from_parts((calls, fee, nonce): BatchAuthorizationParts) -> Self {
        Self {
            calls: calls.into_iter().map(Call::from_parts).collect(),
            fee: FeeConfig::from_parts(fee),
            nonce,
        }
    }
}
