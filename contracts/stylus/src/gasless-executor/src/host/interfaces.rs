//! Solidity ABI interfaces the on-chain host calls into.

use alloy_primitives::Address;
use alloy_sol_types::sol;

sol! {
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address to, uint256 amount) external returns (bool success);
    }

    /// Arbitrum `ArbGasInfo` precompile.
    interface ArbGasInfo {
        function getCurrentTxL1GasFees() external view returns (uint256 fees);
    }
}

/// Address of the `ArbGasInfo` precompile (0x6c).
pub const ARB_GAS_INFO: Address = Address::new([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6c,
]);

/// Address of the `ecrecover` precompile (0x01).
pub const ECRECOVER: Address = Address::new([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
]);
