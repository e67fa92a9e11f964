//! Events emitted by the executor. In forced mode these are the only record of a degraded
//! attempt, so relayers must inspect them rather than rely on the absence of a revert.

use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event ExecutionCompleted(address indexed executor, uint256 indexed nonce, address target, uint256 value, bytes4 selector);

    #[derive(Debug, PartialEq, Eq)]
    event BatchExecutionCompleted(address indexed executor, uint256 indexed nonce, uint256 totalCalls, uint256 executedCalls);

    /// Forced mode only.
    #[derive(Debug, PartialEq, Eq)]
    event CallExecutionFailed(address indexed target, uint256 value, bytes4 selector);

    /// Forced mode only; later calls in the batch were skipped.
    #[derive(Debug, PartialEq, Eq)]
    event BatchCallFailed(uint256 indexed index, address target, uint256 value, bytes4 selector);

    #[derive(Debug, PartialEq, Eq)]
    event FeeTransferProcessed(address indexed receiver, address indexed token, uint256 amount, uint256 totalGas, uint256 extraCost);

    /// Forced mode only; the fee transfer went through but overran its gas budget.
    #[derive(Debug, PartialEq, Eq)]
    event FeeTransferGasLimitExceeded(uint256 budget, uint256 used);
}
