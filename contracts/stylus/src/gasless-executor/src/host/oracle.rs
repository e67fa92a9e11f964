use alloy_primitives::U256;
use alloy_sol_types::SolCall;
use stylus_sdk::call::RawCall;

use super::{
    interfaces::{ArbGasInfo, ARB_GAS_INFO},
    ExtraCostOracle,
};

/// No chain-specific surcharge (L1 deployments).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExtraCost;

impl ExtraCostOracle for NoExtraCost {
    fn estimate(&self) -> U256 {
        U256::ZERO
    }
}

/// L1 data fee of the current transaction, as reported by Arbitrum's `ArbGasInfo` precompile.
///
/// A failed or malformed precompile answer counts as zero so fee processing never blocks on it.
#[derive(Clone, Copy, Debug)]
pub struct ArbGasInfoOracle {
    pub gas_cap: u64,
}

impl Default for ArbGasInfoOracle {
    fn default() -> Self {
        Self { gas_cap: 50_000 }
    }
}

impl ExtraCostOracle for ArbGasInfoOracle {
    fn estimate(&self) -> U256 {
        let input = ArbGasInfo::getCurrentTxL1GasFeesCall {}.abi_encode();
        let out = match unsafe { RawCall::new_static().gas(self.gas_cap).call(ARB_GAS_INFO, &input) } {
            Ok(out) => out,
            Err(_) => return U256::ZERO,
        };
        ArbGasInfo::getCurrentTxL1GasFeesCall::abi_decode_returns(&out, true)
            .map(|ret| ret.fees)
            .unwrap_or(U256::ZERO)
    }
}
