//! Stylus entrypoint of the gasless executor.
//!
//! Installed as the EIP-7702 delegate of an account, so `contract_address()` is the account
//! itself and the nonce lives in the account's storage. Relayers call `executeOne` /
//! `executeBatch` with an authorization signed by the account's own key.
//!
//! The account's storage is shared with whatever it delegated to before or after, so the nonce
//! is kept in an ERC-7201 namespaced slot instead of the layout's slot 0.

use alloc::{vec, vec::Vec};

use alloy_primitives::{FixedBytes, B256, U256};
use gasless_executor_types::{constants::MAX_BATCH_SIZE, domain_separator};
use stylus_sdk::{abi::Bytes, prelude::*};

use crate::{
    abi::{decode_authorization, decode_batch_authorization, AuthorizationTuple, BatchAuthorizationTuple},
    executor::{ExecutionReport, Executor},
    host::OnchainHost,
};

#[cfg(feature = "arbitrum-l1-fees")]
type FeeOracle = crate::host::ArbGasInfoOracle;
#[cfg(not(feature = "arbitrum-l1-fees"))]
type FeeOracle = crate::host::NoExtraCost;

/// `erc7201:gasless.executor.nonce`, i.e.
/// `keccak256(abi.encode(uint256(keccak256("gasless.executor.nonce")) - 1)) & ~bytes32(uint256(0xff))`.
pub const NONCE_SLOT: U256 = U256::from_limbs([
    0xb1d2_7d97_eec5_1000,
    0xba3f_9dcf_6476_9558,
    0xb355_8d4e_afff_fdea,
    0xcda8_90cc_c255_5639,
]);

sol_storage! {
    #[entrypoint]
    pub struct GaslessExecutor {}
}

#[public]
impl GaslessExecutor {
    /// Execute one signed call. Reverts with the callee's data (non-forced) or one of the
    /// executor's custom errors.
    pub fn execute_one(
        &mut self,
        authorization: AuthorizationTuple,
        signature: Bytes,
        forced: bool,
    ) -> Result<(), Vec<u8>> {
        let authorization = decode_authorization(authorization);
        let oracle = FeeOracle::default();
        let mut host = OnchainHost::new(self);
        let report = Executor::new(&mut host, &oracle)
            .execute_one(&authorization, &signature.0, forced)
            .map_err(|err| {
                trace!("executeOne rejected: {:?}", err);
                Vec::<u8>::from(err)
            })?;
        trace_degraded(&report);
        Ok(())
    }

    /// Execute a signed batch of 2..=32 calls.
    pub fn execute_batch(
        &mut self,
        authorization: BatchAuthorizationTuple,
        signature: Bytes,
        forced: bool,
    ) -> Result<(), Vec<u8>> {
        let authorization = decode_batch_authorization(authorization);
        let oracle = FeeOracle::default();
        let mut host = OnchainHost::new(self);
        let report = Executor::new(&mut host, &oracle)
            .execute_batch(&authorization, &signature.0, forced)
            .map_err(|err| {
                trace!("executeBatch rejected: {:?}", err);
                Vec::<u8>::from(err)
            })?;
        trace_degraded(&report);
        Ok(())
    }

    pub fn current_nonce(&self) -> U256 {
        self.stored_nonce()
    }

    /// EIP-712 domain separator authorizations for this account must be signed under.
    pub fn domain_separator(&self) -> FixedBytes<32> {
        domain_separator(self.vm().chain_id(), self.vm().contract_address())
    }

    pub fn max_batch_size(&self) -> U256 {
        U256::from(MAX_BATCH_SIZE)
    }
}

impl GaslessExecutor {
    /// Replay nonce; advanced by exactly one per committed authorization.
    pub(crate) fn stored_nonce(&self) -> U256 {
        U256::from_be_bytes(self.vm().storage_load_bytes32(NONCE_SLOT).0)
    }

    pub(crate) fn bump_nonce(&mut self) {
        let next = self.stored_nonce().saturating_add(U256::from(1u64));
        unsafe { self.vm().storage_cache_bytes32(NONCE_SLOT, B256::from(next.to_be_bytes::<32>())) };
        self.vm().flush_cache(false);
    }
}

fn trace_degraded(report: &ExecutionReport) {
    if !report.is_complete() {
        trace!(
            "nonce {} committed degraded: executed {}/{} calls, failure {:?}",
            report.nonce,
            report.executed_calls,
            report.total_calls,
            report.failure.as_ref().map(|failure| hex::encode(&failure.return_data))
        );
    }
}
